use crate::ports::TestClassMetadata;
use crate::value_objects::ServiceKind;

/// Capability declaration of a test class
///
/// ```
/// use cfprov_domain::{ServiceKind, TestClass};
///
/// let class = TestClass::new("OrderListenerIT")
///     .requires(ServiceKind::RabbitMq)
///     .with_marker("redis");
/// assert_eq!(class.markers().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestClass {
    name: String,
    markers: Vec<String>,
}

impl TestClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    /// Declare a raw capability marker
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Declare a required service kind
    pub fn requires(self, kind: ServiceKind) -> Self {
        self.with_marker(kind.marker())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl TestClassMetadata for TestClass {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn capability_markers(&self) -> Vec<&str> {
        self.markers.iter().map(String::as_str).collect()
    }
}
