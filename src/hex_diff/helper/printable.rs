/// Printable column rendering of one byte: itself within 0x20..=0x7e, `.` otherwise.
pub fn printable(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        char::from(byte)
    } else {
        '.'
    }
}
