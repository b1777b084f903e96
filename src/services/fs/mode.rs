//! Permission strings: every set type/flag letter (or `-` when none is set)
//! followed by three `rwx` triplets, e.g. `drwxr-xr-x`, `Lrwxrwxrwx` or
//! `dtrwxrwxrwx` for a sticky directory.

use std::fs::Metadata;

#[cfg(unix)]
pub fn mode_string(md: &Metadata) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let ft = md.file_type();
    let bits = md.permissions().mode();

    let mut out = String::with_capacity(11);
    if ft.is_dir() {
        out.push('d');
    }
    if ft.is_symlink() {
        out.push('L');
    }
    if ft.is_block_device() || ft.is_char_device() {
        out.push('D');
    }
    if ft.is_fifo() {
        out.push('p');
    }
    if ft.is_socket() {
        out.push('S');
    }
    if bits & 0o4000 != 0 {
        out.push('u');
    }
    if bits & 0o2000 != 0 {
        out.push('g');
    }
    if ft.is_char_device() {
        out.push('c');
    }
    if bits & 0o1000 != 0 {
        out.push('t');
    }
    if out.is_empty() {
        out.push('-');
    }
    out.push_str(&permission_triplets(bits));
    out
}

#[cfg(not(unix))]
pub fn mode_string(md: &Metadata) -> String {
    let ft = md.file_type();
    let type_char = if ft.is_dir() {
        'd'
    } else if ft.is_symlink() {
        'L'
    } else {
        '-'
    };
    let bits = if md.permissions().readonly() { 0o444 } else { 0o666 };

    let mut out = String::with_capacity(10);
    out.push(type_char);
    out.push_str(&permission_triplets(bits));
    out
}

/// Renders the low nine permission bits as `rwxrwxrwx`, with `-` for unset bits.
pub fn permission_triplets(bits: u32) -> String {
    const LETTERS: [char; 3] = ['r', 'w', 'x'];
    (0..9)
        .map(|i| {
            if bits & (1 << (8 - i)) != 0 {
                LETTERS[i % 3]
            } else {
                '-'
            }
        })
        .collect()
}
