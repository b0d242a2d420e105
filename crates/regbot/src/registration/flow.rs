//! Conversation state machine
//!
//! [`transition`] is a pure function of (state, event): it never talks to the
//! gateway, it only says what the next state is and which effects to perform.
//! The effects are executed afterwards by [`super::RegistrationFlow`].

use crate::core::config::limits::{telegram_len, MAX_FIELD_LEN};

use super::keywords::CompletionKeywords;
use super::submission::{Details, Field, PhotoLimitReached, PhotoRef, PhotoSet, Submission, Submitter};

/// State of one conversation. Collected data travels inside the variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    AwaitingName {
        submitter: Submitter,
    },
    AwaitingPhone {
        submitter: Submitter,
        full_name: String,
    },
    AwaitingVehicle {
        submitter: Submitter,
        full_name: String,
        phone: String,
    },
    CollectingPhotos {
        submitter: Submitter,
        details: Details,
        photos: PhotoSet,
    },
    /// Finished, cancelled or never started
    #[default]
    Terminated,
}

impl FlowState {
    pub fn is_active(&self) -> bool {
        !matches!(self, FlowState::Terminated)
    }

    /// Field the state is waiting for, if it waits for text
    pub fn awaited_field(&self) -> Option<Field> {
        match self {
            FlowState::AwaitingName { .. } => Some(Field::FullName),
            FlowState::AwaitingPhone { .. } => Some(Field::Phone),
            FlowState::AwaitingVehicle { .. } => Some(Field::Vehicle),
            FlowState::CollectingPhotos { .. } | FlowState::Terminated => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlowState::AwaitingName { .. } => "awaiting_name",
            FlowState::AwaitingPhone { .. } => "awaiting_phone",
            FlowState::AwaitingVehicle { .. } => "awaiting_vehicle",
            FlowState::CollectingPhotos { .. } => "collecting_photos",
            FlowState::Terminated => "terminated",
        }
    }
}

/// Inbound user input, already classified by the gateway layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The start command
    Start(Submitter),
    /// The cancel command
    Cancel,
    /// Any other slash command, with its full text
    Command(String),
    /// Plain text
    Text(String),
    /// Highest-resolution variant of an attached photo
    Photo(PhotoRef),
    /// Anything else: stickers, documents, voice...
    Unsupported,
}

/// Replies sent back to the user; rendering to text happens in the telegram layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Welcome,
    Ask(Field),
    AskPhotos,
    EmptyField(Field),
    FieldTooLong(Field),
    CommandNotAccepted(Field),
    TextExpected(Field),
    PhotoAccepted { count: usize },
    PhotoLimitReached,
    NoPhotos,
    FinishHint,
    PhotosExpected,
    Submitted,
    Cancelled,
    NotStarted,
    NothingToCancel,
}

/// Side effect requested by a transition, executed in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a reply to the user's own chat
    Reply(Reply),
    /// Forward a completed submission to the destination group
    Forward(Submission),
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: FlowState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: FlowState, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }

    fn stay(state: FlowState, replies: impl IntoIterator<Item = Reply>) -> Self {
        Self::to(state, replies.into_iter().map(Effect::Reply).collect())
    }
}

/// Computes the next state and the effects for `event` arriving in `state`
pub fn transition(state: FlowState, event: Event, keywords: &CompletionKeywords) -> Transition {
    match (state, event) {
        // A start command always begins a fresh instance, discarding any draft
        (_, Event::Start(submitter)) => Transition::stay(
            FlowState::AwaitingName { submitter },
            [Reply::Welcome, Reply::Ask(Field::FullName)],
        ),

        (FlowState::Terminated, Event::Cancel) => Transition::stay(FlowState::Terminated, [Reply::NothingToCancel]),
        (FlowState::Terminated, _) => Transition::stay(FlowState::Terminated, [Reply::NotStarted]),

        (_, Event::Cancel) => Transition::stay(FlowState::Terminated, [Reply::Cancelled]),

        (FlowState::CollectingPhotos { submitter, details, photos }, event) => {
            collect_photos(submitter, details, photos, event, keywords)
        }

        (state, event) => {
            // Only the three text states reach this arm
            let Some(field) = state.awaited_field() else {
                return Transition::to(state, Vec::new());
            };
            match event {
                Event::Text(text) => match validate_field(&text) {
                    Ok(value) => store_field(state, value),
                    Err(rejection) => Transition::stay(state, [rejection.reply(field), Reply::Ask(field)]),
                },
                Event::Command(_) => Transition::stay(state, [Reply::CommandNotAccepted(field), Reply::Ask(field)]),
                Event::Photo(_) | Event::Unsupported => {
                    Transition::stay(state, [Reply::TextExpected(field), Reply::Ask(field)])
                }
                Event::Start(_) | Event::Cancel => Transition::to(state, Vec::new()),
            }
        }
    }
}

/// Why a text input was not accepted as a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Empty,
    TooLong,
}

impl Rejection {
    fn reply(self, field: Field) -> Reply {
        match self {
            Rejection::Empty => Reply::EmptyField(field),
            Rejection::TooLong => Reply::FieldTooLong(field),
        }
    }
}

/// Trims the input and checks it is usable as a field value
fn validate_field(text: &str) -> Result<String, Rejection> {
    let value = text.trim();
    if value.is_empty() {
        return Err(Rejection::Empty);
    }
    if telegram_len(value) > MAX_FIELD_LEN {
        return Err(Rejection::TooLong);
    }
    Ok(value.to_string())
}

fn store_field(state: FlowState, value: String) -> Transition {
    match state {
        FlowState::AwaitingName { submitter } => Transition::stay(
            FlowState::AwaitingPhone {
                submitter,
                full_name: value,
            },
            [Reply::Ask(Field::Phone)],
        ),
        FlowState::AwaitingPhone { submitter, full_name } => Transition::stay(
            FlowState::AwaitingVehicle {
                submitter,
                full_name,
                phone: value,
            },
            [Reply::Ask(Field::Vehicle)],
        ),
        FlowState::AwaitingVehicle {
            submitter,
            full_name,
            phone,
        } => Transition::stay(
            FlowState::CollectingPhotos {
                submitter,
                details: Details {
                    full_name,
                    phone,
                    vehicle_description: value,
                },
                photos: PhotoSet::default(),
            },
            [Reply::AskPhotos],
        ),
        other => Transition::to(other, Vec::new()),
    }
}

fn collect_photos(
    submitter: Submitter,
    details: Details,
    mut photos: PhotoSet,
    event: Event,
    keywords: &CompletionKeywords,
) -> Transition {
    let reply = match event {
        Event::Photo(photo) => match photos.push(photo) {
            Ok(count) => Reply::PhotoAccepted { count },
            Err(PhotoLimitReached) => Reply::PhotoLimitReached,
        },
        Event::Text(text) if keywords.matches(&text) => {
            if let Some(submission) = Submission::new(details.clone(), photos.clone(), submitter.clone()) {
                return Transition::to(
                    FlowState::Terminated,
                    vec![Effect::Forward(submission), Effect::Reply(Reply::Submitted)],
                );
            }
            Reply::NoPhotos
        }
        Event::Text(_) => Reply::FinishHint,
        Event::Command(_) | Event::Unsupported | Event::Start(_) | Event::Cancel => Reply::PhotosExpected,
    };

    Transition::stay(
        FlowState::CollectingPhotos {
            submitter,
            details,
            photos,
        },
        [reply],
    )
}
