pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open /dev/mem: {0}")]
    OpenDevMem(#[source] std::io::Error),

    #[error("mmap of {span:#x} bytes at physical address {base:#x} failed: {source}")]
    Mmap {
        base: usize,
        span: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("register window at offset {offset:#x} ({len:#x} bytes) exceeds the mapped span of {span:#x} bytes")]
    WindowOutOfRange {
        offset: usize,
        len: usize,
        span: usize,
    },
}
