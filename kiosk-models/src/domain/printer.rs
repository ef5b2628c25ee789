//! Ticket printer settings payloads.
//!
//! The ticket form switches the kiosk between registered tickets (shown on
//! screen) and printed tickets (USB printer). Both the printer row and the
//! touch screen `n` flag follow that choice.

use super::common::deserialize_lenient_i32;
use crate::{
    constants::SINGLETON_ID, entities::printer::ActiveModel, enums::common::TicketKind,
};
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use std::str::FromStr;
use validator::Validate;

/// Default printed ticket header.
pub const DEFAULT_TICKET_HEADER: &str = "Queue Management";

/// `POST /ticket` form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TicketForm {
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub value: Option<i32>,
    /// USB identity, `vendor_product_inep_outep`.
    #[serde(default)]
    pub printer: Option<String>,
    #[serde(default)]
    #[validate(length(min = 2, max = 8, message = "langu length must be 2..=8"))]
    pub langu: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 1, max = 10, message = "scale must be 1..=10"))]
    pub scale: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 128, message = "header length must be <= 128"))]
    pub header: Option<String>,
}

/// What a ticket submission asks for, once decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketCommand {
    Registered,
    Printed {
        identity: PrinterIdentity,
        langu: Option<String>,
        scale: Option<i32>,
        header: Option<String>,
    },
}

impl TicketForm {
    /// `None` when the value is unknown or the printer identity is missing or malformed.
    pub fn into_command(self) -> Option<TicketCommand> {
        let kind = self
            .value
            .and_then(|v| i16::try_from(v).ok())
            .and_then(|v| TicketKind::try_from(v).ok())?;
        match kind {
            TicketKind::Registered => Some(TicketCommand::Registered),
            TicketKind::Printed => {
                let identity = self.printer.as_deref()?.parse().ok()?;
                Some(TicketCommand::Printed {
                    identity,
                    langu: self.langu.filter(|l| !l.trim().is_empty()),
                    scale: self.scale,
                    header: self.header,
                })
            }
        }
    }
}

/// USB printer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterIdentity {
    pub vendor: i32,
    pub product: i32,
    pub in_ep: i32,
    pub out_ep: i32,
}

fn parse_usb_number(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        return i32::from_str_radix(hex, 16).ok();
    }
    raw.parse::<i32>()
        .ok()
        .or_else(|| i32::from_str_radix(raw, 16).ok())
}

impl FromStr for PrinterIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('_')
            .map(parse_usb_number)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| format!("invalid printer identity `{s}`"))?;
        match parts.as_slice() {
            [vendor, product, in_ep, out_ep] => Ok(PrinterIdentity {
                vendor: *vendor,
                product: *product,
                in_ep: *in_ep,
                out_ep: *out_ep,
            }),
            _ => Err(format!("printer identity `{s}` must have four parts")),
        }
    }
}

/// Partial update of the printer row; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, IntoPartialActiveModel)]
pub struct UpdatePrinter {
    pub value: Option<TicketKind>,
    pub active: Option<bool>,
    pub vendor: Option<i32>,
    pub product: Option<i32>,
    pub in_ep: Option<i32>,
    pub out_ep: Option<i32>,
    pub langu: Option<String>,
    pub scale: Option<i32>,
    pub header: Option<String>,
}

impl From<TicketCommand> for UpdatePrinter {
    fn from(cmd: TicketCommand) -> Self {
        match cmd {
            TicketCommand::Registered => UpdatePrinter {
                value: Some(TicketKind::Registered),
                active: Some(false),
                ..Default::default()
            },
            TicketCommand::Printed {
                identity,
                langu,
                scale,
                header,
            } => UpdatePrinter {
                value: Some(TicketKind::Printed),
                active: Some(true),
                vendor: Some(identity.vendor),
                product: Some(identity.product),
                in_ep: Some(identity.in_ep),
                out_ep: Some(identity.out_ep),
                langu,
                scale,
                header,
            },
        }
    }
}

/// Row inserted the first time the printer settings are read.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewPrinter {
    pub id: i32,
    pub value: TicketKind,
    pub active: bool,
    pub vendor: i32,
    pub product: i32,
    pub in_ep: i32,
    pub out_ep: i32,
    pub langu: String,
    pub scale: i32,
    pub header: String,
}

impl Default for NewPrinter {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            value: TicketKind::Registered,
            active: false,
            vendor: 0,
            product: 0,
            in_ep: 0,
            out_ep: 0,
            langu: "en".into(),
            scale: 1,
            header: DEFAULT_TICKET_HEADER.into(),
        }
    }
}
