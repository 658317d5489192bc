use crate::domain::models::{
    invitation::InvitationPatch,
    rsvp::{RsvpPatch, RsvpStatus},
    wish::{WishPatch, MAX_MESSAGE_CHARS},
};
use crate::error::AppError;
use serde::Deserialize;

/// Treats a blank string the same as a missing one.
pub fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => present(Some(v))
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{} must not be empty", field))),
    }
}

fn check_message_len(message: &str) -> Result<(), AppError> {
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!("Message must be at most {} characters", MAX_MESSAGE_CHARS)));
    }
    Ok(())
}

fn check_guests(guests: i32) -> Result<(), AppError> {
    if guests < 0 {
        return Err(AppError::Validation("Guests must not be negative".into()));
    }
    Ok(())
}

fn required_id(id: Option<i64>) -> Result<i64, AppError> {
    id.ok_or_else(|| AppError::Validation("ID required".into()))
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    pub id: Option<i64>,
}

impl DeleteQuery {
    pub fn id(&self) -> Result<i64, AppError> {
        required_id(self.id)
    }
}

#[derive(Deserialize)]
pub struct GuestQuery {
    pub u: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateWishRequest {
    pub name: Option<String>,
    pub message: Option<String>,
}

impl CreateWishRequest {
    pub fn validate(self) -> Result<(String, String), AppError> {
        let (name, message) = match (present(self.name), present(self.message)) {
            (Some(name), Some(message)) => (name, message),
            _ => return Err(AppError::Validation("Name and message required".into())),
        };
        check_message_len(&message)?;
        Ok((name, message))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateWishRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub message: Option<String>,
}

impl UpdateWishRequest {
    pub fn into_patch(self) -> Result<(i64, WishPatch), AppError> {
        let id = required_id(self.id)?;
        let patch = WishPatch {
            name: non_blank(self.name, "name")?,
            message: non_blank(self.message, "message")?,
        };
        if let Some(message) = &patch.message {
            check_message_len(message)?;
        }
        Ok((id, patch))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRsvpRequest {
    pub name: Option<String>,
    pub status: Option<RsvpStatus>,
    pub guests: Option<i32>,
}

impl CreateRsvpRequest {
    pub fn validate(self) -> Result<(String, RsvpStatus, i32), AppError> {
        let (name, status) = match (present(self.name), self.status) {
            (Some(name), Some(status)) => (name, status),
            _ => return Err(AppError::Validation("Incomplete data".into())),
        };
        let guests = self.guests.unwrap_or(0);
        check_guests(guests)?;
        Ok((name, status, guests))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRsvpRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<RsvpStatus>,
    pub guests: Option<i32>,
    pub attended: Option<bool>,
}

impl UpdateRsvpRequest {
    pub fn into_patch(self) -> Result<(i64, RsvpPatch), AppError> {
        let id = required_id(self.id)?;
        if let Some(guests) = self.guests {
            check_guests(guests)?;
        }
        Ok((id, RsvpPatch {
            name: non_blank(self.name, "name")?,
            status: self.status,
            guests: self.guests,
            attended: self.attended,
        }))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateInvitationRequest {
    pub guest_name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateInvitationRequest {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub guest_name: Option<String>,
}

impl UpdateInvitationRequest {
    pub fn into_patch(self) -> Result<(i64, InvitationPatch), AppError> {
        let id = required_id(self.id)?;
        Ok((id, InvitationPatch {
            slug: non_blank(self.slug, "slug")?,
            guest_name: non_blank(self.guest_name, "guestName")?,
        }))
    }
}
