pub const GZIP_EXTENSION: &str = "gz";
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
