use url::Url;

use crate::{
    flow::flow_model::{
        Effect, FlowAction, FlowState, FormState, Notice, ScreenName, SessionMode,
        ValidationError,
    },
    link::{
        codec::{
            decode_url, encode_url, has_sender, link_fingerprint, parse_base, resolve_location,
            safe_text,
        },
        error::LinkError,
    },
    outcome::{outcome_model::Choice, recorder::outcome},
    trace::{logger::TraceLogger, trace::TraceEvent},
};

// ============================================================================
// Session start
// ============================================================================

/// Decide the session mode from the page location.
///
/// A non-empty `from` parameter opens the receiver screen with the decoded
/// payload; anything else starts a blank generator session on Welcome.
pub fn start_session(location: &str) -> Result<FlowState, LinkError> {
    let url = parse_base(location)?;
    Ok(start_session_at(&url))
}

pub fn start_session_at(location: &Url) -> FlowState {
    let base = strip_location(location);

    if has_sender(location.as_str()) {
        return FlowState {
            mode: SessionMode::Receiver,
            screen: ScreenName::Receiver,
            form: FormState::default(),
            base,
            payload: Some(decode_url(location)),
            link: None,
            validation: None,
            answer: None,
        };
    }

    generator_session(base)
}

/// Blank generator session at `location`, whatever its query says.
pub fn new_generator(location: &Url) -> FlowState {
    generator_session(strip_location(location))
}

fn generator_session(base: Url) -> FlowState {
    FlowState {
        mode: SessionMode::Generator,
        screen: ScreenName::Welcome,
        form: FormState::default(),
        base,
        payload: None,
        link: None,
        validation: None,
        answer: None,
    }
}

fn strip_location(location: &Url) -> Url {
    let mut base = location.clone();
    base.set_query(None);
    base.set_fragment(None);
    base
}

// ============================================================================
// Transitions
// ============================================================================

/// Apply one action. Returns the next state and the effects collaborators
/// should carry out. Actions that make no sense on the current screen or in
/// the current mode leave the state untouched and yield no effects.
pub fn transition(state: FlowState, action: &FlowAction) -> (FlowState, Vec<Effect>) {
    match state.mode {
        SessionMode::Generator => generator_transition(state, action),
        SessionMode::Receiver => receiver_transition(state, action),
    }
}

fn generator_transition(mut state: FlowState, action: &FlowAction) -> (FlowState, Vec<Effect>) {
    let mut effects = Vec::new();

    match (state.screen, action) {
        // Field input is accepted on any generator screen
        (_, FlowAction::SetName(name)) => {
            state.form.name = name.clone();
            if state.validation == Some(ValidationError::MissingName) {
                state.validation = None;
            }
        }
        (_, FlowAction::SetTo(to)) => state.form.to = to.clone(),
        (_, FlowAction::SetMsg(msg)) => state.form.msg = msg.clone(),
        (_, FlowAction::PickStatus(status)) => {
            state.form.status = Some(*status);
            if state.validation == Some(ValidationError::MissingStatus) {
                state.validation = None;
            }
        }

        (ScreenName::Welcome, FlowAction::ToStatus) => {
            state.form.name = safe_text(Some(&state.form.name), "");
            if state.form.name.is_empty() {
                state.validation = Some(ValidationError::MissingName);
                effects.push(Effect::Validation(ValidationError::MissingName));
                effects.push(Effect::Notice(Notice::NameRequired));
            } else {
                state.validation = None;
                enter(&mut state, ScreenName::Status, &mut effects);
            }
        }

        (ScreenName::Status, FlowAction::BackToWelcome) => {
            enter(&mut state, ScreenName::Welcome, &mut effects);
        }

        (ScreenName::Status, FlowAction::ToGenerate) => {
            if state.form.status.is_none() {
                state.validation = Some(ValidationError::MissingStatus);
                effects.push(Effect::Validation(ValidationError::MissingStatus));
                effects.push(Effect::Notice(Notice::StatusRequired));
            } else {
                state.validation = None;
                enter(&mut state, ScreenName::Generate, &mut effects);
            }
        }

        (ScreenName::Generate, FlowAction::BackToStatus) => {
            enter(&mut state, ScreenName::Status, &mut effects);
        }

        (ScreenName::Generate, FlowAction::GenerateLink) => {
            generate_link(&mut state, &mut effects);
        }

        (ScreenName::Generate, FlowAction::StartOver) if state.link.is_some() => {
            state = generator_session(state.base);
            effects.push(Effect::ShowScreen(ScreenName::Welcome));
        }

        _ => {}
    }

    (state, effects)
}

/// Re-check the form before building a link. Back-navigation may have
/// emptied a field after its screen guard passed, so a failure here sends
/// the user to the screen owning that field.
fn generate_link(state: &mut FlowState, effects: &mut Vec<Effect>) {
    state.form.name = safe_text(Some(&state.form.name), "");
    state.form.to = safe_text(Some(&state.form.to), "");
    state.form.msg = safe_text(Some(&state.form.msg), "");

    let missing = if state.form.name.is_empty() {
        Some((ValidationError::MissingName, Notice::NameFirst))
    } else if state.form.status.is_none() {
        Some((ValidationError::MissingStatus, Notice::StatusRequired))
    } else {
        None
    };

    if let Some((error, notice)) = missing {
        state.validation = Some(error);
        enter(state, error.owning_screen(), effects);
        effects.push(Effect::Validation(error));
        effects.push(Effect::Notice(notice));
        return;
    }

    let link: String = encode_url(&state.form.to_payload(), &state.base).into();
    state.link = Some(link.clone());
    effects.push(Effect::LinkGenerated(link));
    effects.push(Effect::Notice(Notice::LinkGenerated));
}

fn receiver_transition(mut state: FlowState, action: &FlowAction) -> (FlowState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        FlowAction::Respond(choice) if !state.responded() => {
            if let Some(payload) = &state.payload {
                effects.push(Effect::Outcome(outcome(payload, *choice)));
                state.answer = Some(*choice);
            }
        }

        // "Make my own link" is only offered on the accept card
        FlowAction::StartOver if state.answer == Some(Choice::Accept) => {
            state = generator_session(state.base);
            effects.push(Effect::ShowScreen(ScreenName::Welcome));
        }

        _ => {}
    }

    (state, effects)
}

fn enter(state: &mut FlowState, screen: ScreenName, effects: &mut Vec<Effect>) {
    if state.screen != screen {
        state.screen = screen;
        effects.push(Effect::ShowScreen(screen));
    }
}

// ============================================================================
// Controller (owns the state, traces each step)
// ============================================================================

/// Owns a session's [`FlowState`] and records each dispatched action.
pub struct FlowController {
    state: FlowState,
    step: u64,
    tracer: Option<TraceLogger>,
}

impl FlowController {
    pub fn new(state: FlowState) -> Self {
        Self {
            state,
            step: 0,
            tracer: None,
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Open a session at `location` (receiver or generator mode).
    pub fn open(location: &str) -> Result<Self, LinkError> {
        Ok(Self::new(start_session(location)?))
    }

    /// Open a link as typed on the command line: a bare query string is
    /// placed on `base` first.
    pub fn open_on(input: &str, base: &str) -> Result<Self, LinkError> {
        Ok(Self::new(start_session_at(&resolve_location(input, base)?)))
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn screen(&self) -> ScreenName {
        self.state.screen
    }

    pub fn dispatch(&mut self, action: FlowAction) -> Vec<Effect> {
        let (next, effects) = transition(self.state.clone(), &action);

        if let Some(tracer) = &self.tracer {
            let mut event = TraceEvent::now(self.step, next.mode)
                .with_action(action.id())
                .with_screens(self.state.screen, next.screen);
            for effect in &effects {
                event = match effect {
                    Effect::Notice(n) => event.with_notice(*n),
                    Effect::Validation(v) => event.with_validation(*v),
                    Effect::LinkGenerated(link) => event.with_link_id(link_fingerprint(link)),
                    _ => event,
                };
            }
            if effects.is_empty() && next == self.state {
                event = event.ignored();
            }
            tracer.log(&event);
        }

        self.step += 1;
        self.state = next;
        effects
    }
}
