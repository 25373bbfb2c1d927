use std::fs;
use std::io;
use std::path::Path;

use log::trace;

mod macros;

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub trait StrExt {
    /// Splits the string on every occurrence of `pat` and returns the parts,
    /// if there are exactly `N` of them.
    fn split_exact<const N: usize>(&self, pat: &str) -> Option<[&str; N]>;
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> Option<[&str; N]> {
        self.split(pat).collect::<Vec<_>>().try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_exact() {
        assert_eq!("3:00 PM".split_exact::<2>(" "), Some(["3:00", "PM"]));
        assert_eq!("3:00".split_exact::<2>(":"), Some(["3", "00"]));
        assert_eq!(":".split_exact::<2>(":"), Some(["", ""]));

        assert_eq!("3 PM".split_exact::<2>(":"), None);
        assert_eq!("3:00:00".split_exact::<2>(":"), None);
        assert_eq!("3:00  PM".split_exact::<2>(" "), None);
        assert_eq!("".split_exact::<2>(" "), None);
    }
}
