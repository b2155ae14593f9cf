/// Capability query over a test class
pub trait TestClassMetadata {
    /// Name of the test class, used in errors and logs
    fn class_name(&self) -> &str;

    /// Capability markers declared by the class
    fn capability_markers(&self) -> Vec<&str>;
}
