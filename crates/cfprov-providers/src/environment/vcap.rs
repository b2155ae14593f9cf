//! VCAP_SERVICES Environment Adapter
//!
//! Encodes a credential set the way the Cloud Foundry runtime binds
//! services, so configuration libraries that read `VCAP_SERVICES` connect to
//! the provisioned instances unchanged.
//!
//! ## Document shape
//!
//! ```json
//! {
//!   "rabbitmq-2.8": [{
//!     "name": "rabbit-test",
//!     "label": "rabbitmq-2.8",
//!     "plan": "free",
//!     "tags": ["rabbitmq"],
//!     "credentials": {
//!       "hostname": "10.0.0.5", "host": "10.0.0.5", "port": 5672,
//!       "username": "u", "user": "u", "password": "p", "pass": "p",
//!       "name": "vh", "vhost": "vh",
//!       "uri": "amqp://u:p@10.0.0.5:5672/vh"
//!     }
//!   }]
//! }
//! ```

use cfprov_domain::error::{Error, Result};
use cfprov_domain::ports::EnvironmentAdapter;
use cfprov_domain::value_objects::{CredentialSet, Credentials, ServiceKind};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use super::writer::EnvWriter;
use crate::constants::{DEFAULT_SERVICE_PLAN, VCAP_SERVICES_VARIABLE};

/// Publishes credentials as a `VCAP_SERVICES` document
pub struct VcapServicesAdapter {
    writer: Arc<dyn EnvWriter>,
    variable: String,
    plan: String,
}

impl VcapServicesAdapter {
    /// Write `VCAP_SERVICES` with the `free` plan through `writer`
    pub fn new(writer: Arc<dyn EnvWriter>) -> Self {
        Self {
            writer,
            variable: VCAP_SERVICES_VARIABLE.to_string(),
            plan: DEFAULT_SERVICE_PLAN.to_string(),
        }
    }

    /// Use a different environment variable name
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Record a different plan name in each binding
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Render the document for a credential set
    pub fn render(&self, credentials: &CredentialSet) -> Result<String> {
        let mut services = Map::new();
        for (kind, creds) in credentials.iter() {
            let label = kind.label();
            let binding = json!({
                "name": kind.instance_name(),
                "label": label,
                "plan": self.plan,
                "tags": [kind.marker()],
                "credentials": binding_credentials(kind, creds)?,
            });
            services.insert(label, Value::Array(vec![binding]));
        }
        Ok(serde_json::to_string(&Value::Object(services))?)
    }
}

impl std::fmt::Debug for VcapServicesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcapServicesAdapter")
            .field("variable", &self.variable)
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}

impl EnvironmentAdapter for VcapServicesAdapter {
    fn apply(&self, credentials: CredentialSet) -> Result<()> {
        let document = self.render(&credentials)?;
        debug!(variable = %self.variable, bytes = document.len(), "Rendered service bindings");

        self.writer.set_var(&self.variable, &document)?;
        info!(
            variable = %self.variable,
            services = credentials.len(),
            "Bound provisioned services into the environment"
        );
        Ok(())
    }
}

/// Credentials object of one binding, under every name clients look for
fn binding_credentials(kind: ServiceKind, creds: &Credentials) -> Result<Value> {
    let mut object: Map<String, Value> = creds
        .extra()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    object.insert("hostname".into(), creds.hostname().into());
    object.insert("host".into(), creds.hostname().into());
    object.insert("port".into(), creds.port().into());
    if let Some(user) = creds.username() {
        object.insert("username".into(), user.into());
        object.insert("user".into(), user.into());
    }
    if let Some(password) = creds.password() {
        object.insert("password".into(), password.into());
        object.insert("pass".into(), password.into());
    }
    if let Some(namespace) = creds.namespace() {
        object.insert("name".into(), namespace.into());
        if kind == ServiceKind::RabbitMq {
            object.insert("vhost".into(), namespace.into());
        }
    }
    object.insert("uri".into(), connection_uri(kind, creds)?.into());

    Ok(Value::Object(object))
}

/// Connection URI in the scheme of the service kind
///
/// User name, password and virtual host are percent-encoded, so a RabbitMQ
/// vhost of `/` renders as `%2F`.
fn connection_uri(kind: ServiceKind, creds: &Credentials) -> Result<String> {
    let vhost = match kind {
        ServiceKind::RabbitMq => creds.namespace(),
        ServiceKind::Redis => None,
    };
    let root = if vhost.is_some() { "/" } else { "" };

    let mut uri = Url::parse(&format!(
        "{}://{}:{}{}",
        kind.uri_scheme(),
        creds.hostname(),
        creds.port(),
        root
    ))
    .map_err(|e| {
        Error::infrastructure_with_source(
            format!("Cannot build {kind} URI for host '{}'", creds.hostname()),
            e,
        )
    })?;

    let unsupported = |part: &str| {
        Error::infrastructure(format!(
            "{kind} URI for host '{}' cannot carry a {part}",
            creds.hostname()
        ))
    };
    // The userinfo encode set leaves '%' alone
    let username = creds.username().unwrap_or_default().replace('%', "%25");
    let password = creds.password().map(|p| p.replace('%', "%25"));
    uri.set_username(&username)
        .map_err(|()| unsupported("user name"))?;
    uri.set_password(password.as_deref())
        .map_err(|()| unsupported("password"))?;
    if let Some(vhost) = vhost {
        uri.path_segments_mut()
            .map_err(|()| unsupported("virtual host"))?
            .pop_if_empty()
            .push(vhost);
    }

    Ok(uri.into())
}
