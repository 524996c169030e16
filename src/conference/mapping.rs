//! Mappers from query response nodes to domain records.
//!
//! One function per query shape. Each documents exactly which optional
//! speaker fields it can fill; everything else is left empty and the
//! record's [`SpeakerDetail`] says so.

use crate::graphql::queries::{
    SessionDetailNode, SessionListNode, SpeakerDetailNode, SpeakerListingNode,
    SpeakerProfileNode, SpeakerSummaryNode,
};
use crate::models::{Session, Speaker, SpeakerDetail};

/// `GetSessions` session with summary speakers.
///
/// Speakers carry username, name and avatar only ([`SpeakerDetail::Summary`]).
pub fn session_from_list(node: SessionListNode) -> Session {
    Session {
        id: node.id,
        title: node.title,
        description: node.description,
        start: node.start,
        end: node.end,
        event_type: node.event_type,
        event_subtype: node.event_subtype,
        venue: node.venue,
        speakers: node.speakers.into_iter().map(speaker_from_summary).collect(),
    }
}

/// `GetSessionDetails` session with profile speakers.
///
/// Speakers carry everything except attendance years ([`SpeakerDetail::Profile`]).
pub fn session_from_details(node: SessionDetailNode) -> Session {
    Session {
        id: node.id,
        title: node.title,
        description: node.description,
        start: node.start,
        end: node.end,
        event_type: node.event_type,
        event_subtype: node.event_subtype,
        venue: node.venue,
        speakers: node.speakers.into_iter().map(speaker_from_profile).collect(),
    }
}

/// Summary speaker embedded in `GetSessions`: username, name, avatar.
pub fn speaker_from_summary(node: SpeakerSummaryNode) -> Speaker {
    Speaker::summary(node.username, node.name, node.avatar)
}

/// Profile speaker embedded in `GetSessionDetails`: all but years.
pub fn speaker_from_profile(node: SpeakerProfileNode) -> Speaker {
    Speaker {
        username: node.username,
        name: node.name,
        company: node.company,
        position: node.position,
        about: node.about,
        location: node.location,
        url: node.url,
        avatar: node.avatar,
        years: Vec::new(),
        detail: SpeakerDetail::Profile,
    }
}

/// Directory speaker from `GetSpeakers`: adds company and position.
pub fn speaker_from_listing(node: SpeakerListingNode) -> Speaker {
    Speaker {
        company: node.company,
        position: node.position,
        detail: SpeakerDetail::Listing,
        ..Speaker::summary(node.username, node.name, node.avatar)
    }
}

/// Full speaker from `GetSpeakerDetails`: every field.
pub fn speaker_from_details(node: SpeakerDetailNode) -> Speaker {
    Speaker {
        username: node.username,
        name: node.name,
        company: node.company,
        position: node.position,
        about: node.about,
        location: node.location,
        url: node.url,
        avatar: node.avatar,
        years: node.years,
        detail: SpeakerDetail::Full,
    }
}
