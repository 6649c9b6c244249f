#[cfg(feature = "dbus-backend")]
mod imp {
    use anyhow::Context;
    use std::time::Duration;
    use zbus::blocking::Connection;

    use crate::backend::call::{call_with_timeout, ConnectionSlot};
    use crate::backend::Backend;

    const SERVICE: &str = "com.nokia.SystemInfo";
    const OBJECT_PATH: &str = "/com/nokia/SystemInfo";
    const INTERFACE: &str = "com.nokia.SystemInfo";
    const METHOD: &str = "GetConfigValue";

    /// Queries the system bus SystemInfo service.
    ///
    /// The connection is dropped in `fini` and reopened by the next `get`.
    pub struct DbusBackend {
        timeout: Duration,
        connection: ConnectionSlot<Connection>,
    }

    impl DbusBackend {
        pub fn new(timeout_seconds: u64) -> Self {
            Self {
                timeout: Duration::from_secs(timeout_seconds),
                connection: ConnectionSlot::new(),
            }
        }

        fn connection(&self) -> anyhow::Result<Connection> {
            self.connection
                .get_or_connect(|| Connection::system().context("connect to system bus"))
        }
    }

    impl Backend for DbusBackend {
        fn name(&self) -> &str {
            "dbus"
        }

        fn init(&self) -> anyhow::Result<()> {
            self.connection().map(|_| ())
        }

        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            let connection = self.connection()?;
            let owned_key = key.to_string();
            call_with_timeout(self.timeout, &format!("D-Bus query for {key}"), move || {
                get_config_value(&connection, &owned_key)
            })
            .map(Some)
        }

        fn fini(&self) {
            if self.connection.release() {
                tracing::debug!("released system bus connection");
            }
        }
    }

    fn get_config_value(connection: &Connection, key: &str) -> anyhow::Result<String> {
        let reply = connection
            .call_method(Some(SERVICE), OBJECT_PATH, Some(INTERFACE), METHOD, &(key,))
            .with_context(|| format!("D-Bus query {METHOD}({key}) failed"))?;
        let bytes: Vec<u8> = reply
            .body()
            .deserialize()
            .context("D-Bus reply is not a byte array")?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(feature = "dbus-backend")]
pub use imp::DbusBackend;

#[cfg(not(feature = "dbus-backend"))]
pub struct DbusBackend;

#[cfg(not(feature = "dbus-backend"))]
impl DbusBackend {
    pub fn new(_timeout_seconds: u64) -> Self {
        Self
    }
}

#[cfg(not(feature = "dbus-backend"))]
impl super::Backend for DbusBackend {
    fn name(&self) -> &str {
        "dbus"
    }

    fn init(&self) -> anyhow::Result<()> {
        anyhow::bail!("dbus backend not enabled; rebuild with --features dbus-backend")
    }

    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("dbus backend not enabled; rebuild with --features dbus-backend")
    }
}
