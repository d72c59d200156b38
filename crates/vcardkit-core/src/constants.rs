/// Product name used in generated `PRODID` values and log output
pub const PRODUCT_NAME: &str = "vcardkit";
pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Formal public identifier written to the `PRODID` property
pub const PRODUCT_ID: &str = const_str::concat!("-//", PRODUCT_NAME, "//", PRODUCT_VERSION, "//EN");

/// Charset announced next to quoted-printable values
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Configuration file looked up in the working directory (extension optional)
pub const CONFIG_FILE_NAME: &str = "vcardkit";

/// Prefix of environment variables that override configuration values
pub const ENV_PREFIX: &str = "VCARDKIT";

/// Largest VCF file the front end will read (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE: i64 = 100 * 1024 * 1024;
