use crate::utils::error::Result;

pub trait Storage {
    /// Fails with `MissingFile` when nothing exists at `path`.
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn remove_file(&self, path: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn assignments_path(&self) -> Option<&str>;
    fn organization(&self) -> &str;
    fn has_header(&self) -> bool;
}
