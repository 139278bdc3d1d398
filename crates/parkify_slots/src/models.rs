// --- File: crates/parkify_slots/src/models.rs ---
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::datetime::parse_local;
use crate::error::SlotsError;
use crate::logic::calculate_total;

/// A single check-in record as stored in the `bookedSlots` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Time-based identifier (milliseconds since the Unix epoch).
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "1741946400000"))]
    pub id: String,

    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub car_number: String,

    #[serde(default, with = "crate::datetime")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2025-03-14T10:00")
    )]
    pub check_in_time: Option<NaiveDateTime>,

    #[serde(default, with = "crate::datetime")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2025-03-14T12:30")
    )]
    pub check_out_time: Option<NaiveDateTime>,

    /// Started hours between check-in and check-out.
    #[serde(default)]
    pub total_hours: i64,

    /// `total_hours` times the hourly rate.
    #[serde(default)]
    pub total_amount: i64,

    /// Grid cell this booking occupies. Records written by older clients may lack it;
    /// `BookingStore::replace_all` places those on free cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_index: Option<usize>,
}

impl Booking {
    /// Builds the record that gets posted when the check-in form is submitted.
    pub fn from_form(form: &CheckinForm, id: String, slot_index: Option<usize>) -> Self {
        Self {
            id,
            user_name: form.user_name.clone(),
            car_number: form.car_number.clone(),
            check_in_time: parse_local(&form.check_in_time),
            check_out_time: parse_local(&form.check_out_time),
            total_hours: form.total_hours,
            total_amount: form.total_amount,
            slot_index,
        }
    }
}

/// The fields of the check-in form, named as the form inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    UserName,
    CarNumber,
    CheckInTime,
    CheckOutTime,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::UserName,
        FormField::CarNumber,
        FormField::CheckInTime,
        FormField::CheckOutTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::UserName => "userName",
            FormField::CarNumber => "carNumber",
            FormField::CheckInTime => "checkInTime",
            FormField::CheckOutTime => "checkOutTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::UserName => "User Name",
            FormField::CarNumber => "Car Number",
            FormField::CheckInTime => "Check-in Time",
            FormField::CheckOutTime => "Check-out Time",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = SlotsError;

    /// Accepts the input name (`checkInTime`) as well as snake or kebab case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "username" | "user" | "name" => Ok(FormField::UserName),
            "carnumber" | "car" => Ok(FormField::CarNumber),
            "checkintime" | "checkin" => Ok(FormField::CheckInTime),
            "checkouttime" | "checkout" => Ok(FormField::CheckOutTime),
            _ => Err(SlotsError::UnknownField(s.to_string())),
        }
    }
}

/// In-progress check-in form. Timestamps are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckinForm {
    pub user_name: String,
    pub car_number: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub total_hours: i64,
    pub total_amount: i64,
}

impl CheckinForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::UserName => &self.user_name,
            FormField::CarNumber => &self.car_number,
            FormField::CheckInTime => &self.check_in_time,
            FormField::CheckOutTime => &self.check_out_time,
        }
    }

    /// Applies one field change, then recomputes the totals when both
    /// timestamps are filled in.
    pub fn apply_change(&mut self, field: FormField, value: impl Into<String>, rate_per_hour: i64) {
        let value = value.into();
        match field {
            FormField::UserName => self.user_name = value,
            FormField::CarNumber => self.car_number = value,
            FormField::CheckInTime => self.check_in_time = value,
            FormField::CheckOutTime => self.check_out_time = value,
        }

        if !self.check_in_time.is_empty() && !self.check_out_time.is_empty() {
            self.recalculate(rate_per_hour);
        }
    }

    /// Recomputes hours and amount. Leaves the previous totals in place and
    /// returns `false` unless both timestamps parse and check-out is later.
    pub fn recalculate(&mut self, rate_per_hour: i64) -> bool {
        let (Some(check_in), Some(check_out)) = (
            parse_local(&self.check_in_time),
            parse_local(&self.check_out_time),
        ) else {
            return false;
        };

        match calculate_total(check_in, check_out, rate_per_hour) {
            Some(totals) => {
                self.total_hours = totals.hours;
                self.total_amount = totals.amount;
                true
            }
            None => false,
        }
    }
}
