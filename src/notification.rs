//! Notification delivery behind an injected service.
//!
//! [`Notifier`] depends only on the [`NotificationService`] trait; whether a
//! message goes out as an email or an SMS is decided by whoever builds it.

use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Delivers a message to a recipient
pub trait NotificationService {
    /// Sends `message` to `to`
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying transport fails. Implementations
    /// never retry.
    fn send(&mut self, to: &str, message: &str) -> Result<()>;
}

impl<S: NotificationService + ?Sized> NotificationService for &mut S {
    fn send(&mut self, to: &str, message: &str) -> Result<()> {
        (**self).send(to, message)
    }
}

impl<S: NotificationService + ?Sized> NotificationService for Box<S> {
    fn send(&mut self, to: &str, message: &str) -> Result<()> {
        (**self).send(to, message)
    }
}

/// Writes `Sending email to {to}: {message}` lines to its sink
#[derive(Debug)]
pub struct EmailService<W = Stdout> {
    out: W,
}

impl EmailService {
    /// Email service writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> EmailService<W> {
    /// Email service writing to `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the service, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationService for EmailService<W> {
    fn send(&mut self, to: &str, message: &str) -> Result<()> {
        tracing::debug!(to, "delivering email");
        writeln!(self.out, "Sending email to {to}: {message}")?;
        Ok(())
    }
}

/// Writes `Sending SMS to {to}: {message}` lines to its sink
#[derive(Debug)]
pub struct SmsService<W = Stdout> {
    out: W,
}

impl SmsService {
    /// SMS service writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> SmsService<W> {
    /// SMS service writing to `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the service, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationService for SmsService<W> {
    fn send(&mut self, to: &str, message: &str) -> Result<()> {
        tracing::debug!(to, "delivering sms");
        writeln!(self.out, "Sending SMS to {to}: {message}")?;
        Ok(())
    }
}

/// Consumer that hands every notification to the service it was built with
#[derive(Debug)]
pub struct Notifier<S> {
    service: S,
}

impl<S: NotificationService> Notifier<S> {
    /// Creates a notifier bound to `service`
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Sends `message` to `to` through the held service
    ///
    /// # Errors
    ///
    /// Propagates the service's error unchanged.
    pub fn send_notification(&mut self, to: &str, message: &str) -> Result<()> {
        self.service.send(to, message)
    }

    /// Borrows the held service
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Consumes the notifier, returning the service
    pub fn into_inner(self) -> S {
        self.service
    }
}

/// Hands `message` to `logger`
///
/// The caller picks the destination; this function only knows it receives a
/// string.
///
/// ```rust
/// use solid_patterns::notification::process_message;
///
/// let mut seen = Vec::new();
/// process_message("Processing message...", |m| seen.push(m.to_owned()));
/// assert_eq!(seen, ["Processing message..."]);
/// ```
pub fn process_message<L: FnMut(&str)>(message: &str, mut logger: L) {
    logger(message);
}

/// Prints `Log: {message}` to standard output
pub fn console_logger(message: &str) {
    println!("Log: {message}");
}

/// Prints `Writing to file: {message}` to standard output
///
/// Stands in for a file-backed logger; nothing is written to disk.
pub fn file_logger(message: &str) {
    println!("Writing to file: {message}");
}

/// Delivery channels the demo binary can wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// [`EmailService`]
    #[default]
    Email,
    /// [`SmsService`]
    Sms,
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(Error::InvalidChannel(s.to_string())),
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn email_line_format() {
        let mut email = EmailService::new(Vec::new());
        email.send("ana@example.com", "hello").unwrap();
        let out = String::from_utf8(email.into_inner()).unwrap();
        assert_eq!(out, "Sending email to ana@example.com: hello\n");
    }

    #[test]
    fn sms_line_format() {
        let mut sms = SmsService::new(Vec::new());
        sms.send("+5511999990000", "hi").unwrap();
        let out = String::from_utf8(sms.into_inner()).unwrap();
        assert_eq!(out, "Sending SMS to +5511999990000: hi\n");
    }

    #[test]
    fn sink_failure_reaches_caller() {
        let mut notifier = Notifier::new(SmsService::new(BrokenPipe));
        let err = notifier.send_notification("x", "y").unwrap_err();
        assert!(matches!(err, Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn channel_parse_and_display() {
        assert_eq!("SMS".parse::<Channel>().unwrap(), Channel::Sms);
        assert_eq!(Channel::Email.to_string(), "email");
        assert!("pigeon".parse::<Channel>().is_err());
    }
}
