use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Connection attributes returned by the broker for one provisioned instance
///
/// Immutable once built. Brokers report the same attribute under several
/// names (`host`/`hostname`, `user`/`username`, `pass`/`password`,
/// `vhost`/`name`); decoding accepts any of them, and attributes with no
/// dedicated field are kept in [`Credentials::extra`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Credentials {
    hostname: String,
    port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

const HOST_KEYS: &[&str] = &["hostname", "host"];
const USER_KEYS: &[&str] = &["username", "user"];
const PASSWORD_KEYS: &[&str] = &["password", "pass"];
const NAMESPACE_KEYS: &[&str] = &["namespace", "vhost", "name"];

impl Credentials {
    /// Start building credentials for a host and port
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            username: None,
            password: None,
            namespace: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the user name
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the virtual host or namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add an attribute with no dedicated field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Virtual host (RabbitMQ) or namespace of the instance
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Attributes the broker returned that have no dedicated field
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }
}

impl TryFrom<Map<String, Value>> for Credentials {
    type Error = String;

    fn try_from(mut attributes: Map<String, Value>) -> Result<Self, Self::Error> {
        let hostname = take_string(&mut attributes, HOST_KEYS)?
            .ok_or_else(|| "credentials carry no host".to_string())?;
        let port = take_port(&mut attributes)?;
        let username = take_string(&mut attributes, USER_KEYS)?;
        let password = take_string(&mut attributes, PASSWORD_KEYS)?;
        let namespace = take_string(&mut attributes, NAMESPACE_KEYS)?;

        Ok(Self {
            hostname,
            port,
            username,
            password,
            namespace,
            extra: attributes.into_iter().collect(),
        })
    }
}

/// Remove every alias of one attribute, returning the first one present
fn take_string(
    attributes: &mut Map<String, Value>,
    keys: &[&str],
) -> Result<Option<String>, String> {
    let mut found = None;
    for key in keys {
        match attributes.remove(*key) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => {
                found.get_or_insert(s);
            }
            Some(other) => {
                return Err(format!(
                    "credential attribute '{key}' is not a string: {other}"
                ));
            }
        }
    }
    Ok(found)
}

fn take_port(attributes: &mut Map<String, Value>) -> Result<u16, String> {
    match attributes.remove("port") {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|p| u16::try_from(p).ok())
            .ok_or_else(|| format!("credential port out of range: {n}")),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|e| format!("credential port '{s}' is not a number: {e}")),
        Some(other) => Err(format!("credential port has unexpected type: {other}")),
        None => Err("credentials carry no port".to_string()),
    }
}
