use crate::reload::enums::reload_signal::ReloadSignal;
use std::fmt;

impl fmt::Display for ReloadSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReloadSignal::hangup => write!(f, "SIGHUP"),
            ReloadSignal::user_defined1 => write!(f, "SIGUSR1"),
            ReloadSignal::user_defined2 => write!(f, "SIGUSR2"),
        }
    }
}

impl ReloadSignal {
    #[cfg(unix)]
    pub fn signal_kind(&self) -> tokio::signal::unix::SignalKind {
        use tokio::signal::unix::SignalKind;
        match self {
            ReloadSignal::hangup => SignalKind::hangup(),
            ReloadSignal::user_defined1 => SignalKind::user_defined1(),
            ReloadSignal::user_defined2 => SignalKind::user_defined2(),
        }
    }
}
