//! Composition root.
//!
//! The only place that maps a runtime choice onto a concrete strategy type.
//! A new strategy gets one more match arm here; the traits and consumers stay
//! as they are.

use std::io::Write;

use crate::discount::{
    CustomerTier, DiscountCalculator, DiscountStrategy, PremiumDiscount, RegularDiscount,
    SuperVipDiscount, VipDiscount,
};
use crate::export::{CsvSerializer, Format, JsonSerializer, RowSerializer, XmlSerializer};
use crate::notification::{Channel, EmailService, NotificationService, Notifier, SmsService};

/// Boxed discount strategy
pub type DynDiscount = Box<dyn DiscountStrategy + Send + Sync>;

/// Boxed notification service
pub type DynNotificationService<'a> = Box<dyn NotificationService + 'a>;

/// Boxed row serializer
pub type DynRowSerializer = Box<dyn RowSerializer + Send + Sync>;

/// The strategy type for `tier`
#[must_use]
pub fn discount_strategy(tier: CustomerTier) -> DynDiscount {
    tracing::debug!(%tier, "wiring discount strategy");
    match tier {
        CustomerTier::Regular => Box::new(RegularDiscount),
        CustomerTier::Premium => Box::new(PremiumDiscount),
        CustomerTier::Vip => Box::new(VipDiscount),
        CustomerTier::SuperVip => Box::new(SuperVipDiscount),
    }
}

/// Calculator holding the strategy for `tier`
pub fn discount_calculator(tier: CustomerTier) -> DiscountCalculator<DynDiscount> {
    DiscountCalculator::new(discount_strategy(tier))
}

/// Service delivering over `channel`, writing to `out`
pub fn notification_service<'a, W: Write + 'a>(
    channel: Channel,
    out: W,
) -> DynNotificationService<'a> {
    tracing::debug!(%channel, "wiring notification service");
    match channel {
        Channel::Email => Box::new(EmailService::new(out)),
        Channel::Sms => Box::new(SmsService::new(out)),
    }
}

/// Notifier holding the service for `channel`
pub fn notifier<'a, W: Write + 'a>(
    channel: Channel,
    out: W,
) -> Notifier<DynNotificationService<'a>> {
    Notifier::new(notification_service(channel, out))
}

/// Serializer for `format`
#[must_use]
pub fn row_serializer(format: Format) -> DynRowSerializer {
    tracing::debug!(%format, "wiring row serializer");
    match format {
        Format::Json => Box::new(JsonSerializer),
        Format::Csv => Box::new(CsvSerializer),
        Format::Xml => Box::new(XmlSerializer),
    }
}
