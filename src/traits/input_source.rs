#[cfg_attr(test, mockall::automock)]
pub trait InputSource: Send + Sync {
    fn input_boolean(&self, name: &str) -> bool;
}
