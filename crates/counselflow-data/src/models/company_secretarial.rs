//! Company secretarial records: entities, officers, board packs,
//! board meetings and the statutory calendar.

use serde::{Deserialize, Serialize};

use crate::resource::{OrderBy, Record, Resource};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A legal entity in the group structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Entity {
    pub id: String,
    pub tenant_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub jurisdiction: String,
    #[serde(rename = "registrationNumber")]
    pub registration_number: String,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Record for Entity {
    const RESOURCE: Resource = Resource::scoped("entities", "entities", OrderBy::desc("created_at"));
}

/// A director, officer or other person attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct Person {
    pub id: String,
    pub tenant_id: Option<String>,
    pub name: String,
    pub role: String,
    #[serde(rename = "entityId")]
    pub entity_id: String,
    pub email: String,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Record for Person {
    const RESOURCE: Resource = Resource::scoped("people", "people", OrderBy::desc("created_at"));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct BoardPack {
    pub id: String,
    pub tenant_id: Option<String>,
    #[serde(rename = "meetingId")]
    pub meeting_id: String,
    pub title: String,
    pub files: Vec<String>,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Record for BoardPack {
    const RESOURCE: Resource = Resource::scoped("board_packs", "board packs", OrderBy::desc("created_at"));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default)]
pub struct BoardMeeting {
    pub id: String,
    pub tenant_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub meeting_type: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub agenda: String,
    pub attendees: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Record for BoardMeeting {
    const RESOURCE: Resource = Resource::scoped("board_meetings", "board meetings", OrderBy::desc("date"));
}

/// Kind of statutory meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum MeetingKind {
    #[default]
    Board,
    /// Annual general meeting
    Agm,
    /// Extraordinary general meeting
    Egm,
    Committee,
    /// Any label not listed above
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Tentative,
    Confirmed,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// An entry in the statutory meeting calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(rename = "tenant_id")]
    pub tenant_id: Option<String>,
    pub meeting_id: String,
    pub title: String,
    pub entity_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: MeetingKind,
    pub status: EventStatus,
    pub location: String,
    pub is_virtual: bool,
    pub attendee_count: u32,
    pub has_notice_requirement: bool,
    pub notice_deadline: Option<String>,
    pub notice_sent: bool,
}

impl CalendarEvent {
    /// Notice is required but has not gone out yet.
    pub fn notice_outstanding(&self) -> bool {
        self.has_notice_requirement && !self.notice_sent
    }
}

impl Record for CalendarEvent {
    const RESOURCE: Resource = Resource::scoped("calendar_events", "calendar events", OrderBy::asc("date"));
}
