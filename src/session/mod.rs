//! Per-view UI selections: active tab, selected skill, voice toggles and
//! voice settings.
//!
//! State changes go through [`reduce`], a pure `old state + event -> new
//! state` function. Every view mounts with [`SessionState::default`] and the
//! state is discarded when the view is torn down.

pub mod voice;

use crate::content::dashboard::TUTORIAL_STEPS;
use crate::content::skills::{SkillId, CATEGORIES, MY_SKILLS};
pub use voice::{Language, PlaybackSpeed, VoiceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkillTab {
    /// Skills the learner has started, with module progress.
    #[default]
    MySkills,
    /// The learning-category catalog.
    Available,
}

impl SkillTab {
    pub fn id(&self) -> &'static str {
        match self {
            SkillTab::MySkills => "my-skills",
            SkillTab::Available => "available",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SkillTab::MySkills => "My Skills",
            SkillTab::Available => "Available Skills",
        }
    }

    pub fn other(&self) -> SkillTab {
        match self {
            SkillTab::MySkills => SkillTab::Available,
            SkillTab::Available => SkillTab::MySkills,
        }
    }

    /// Ids of the skills listed under this tab, in display order.
    pub fn skill_ids(&self) -> Vec<SkillId> {
        match self {
            SkillTab::MySkills => MY_SKILLS.iter().map(|s| s.id).collect(),
            SkillTab::Available => CATEGORIES.iter().map(|c| c.id).collect(),
        }
    }

    pub fn first_skill(&self) -> SkillId {
        self.skill_ids().first().copied().unwrap_or(SkillId(0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SelectTab(SkillTab),
    SelectSkill(SkillId),
    ToggleListening,
    TogglePlayback,
    SetLanguage(Language),
    SetSpeed(PlaybackSpeed),
    SetVoice(VoiceKind),
    ToggleAutoPlay,
    NextStep,
    PreviousStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub selected_tab: SkillTab,
    pub selected_skill: SkillId,
    pub listening: bool,
    pub playing: bool,
    pub language: Language,
    pub speed: PlaybackSpeed,
    pub voice: VoiceKind,
    pub auto_play: bool,
    /// Index into the voice tutorial's steps.
    pub step: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        let selected_tab = SkillTab::default();
        Self {
            selected_tab,
            selected_skill: selected_tab.first_skill(),
            listening: false,
            playing: false,
            language: Language::default(),
            speed: PlaybackSpeed::default(),
            voice: VoiceKind::default(),
            auto_play: true,
            step: 0,
        }
    }
}

impl SessionState {
    pub fn apply(&mut self, event: SessionEvent) {
        *self = reduce(self, event);
    }

    /// Move the skill selection by `delta` within the active tab, clamped to
    /// the list bounds.
    pub fn step_skill(&mut self, delta: isize) {
        let ids = self.selected_tab.skill_ids();
        if ids.is_empty() {
            return;
        }
        let current = ids
            .iter()
            .position(|id| *id == self.selected_skill)
            .unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, ids.len() as isize - 1) as usize;
        self.apply(SessionEvent::SelectSkill(ids[next]));
    }
}

pub fn reduce(state: &SessionState, event: SessionEvent) -> SessionState {
    let mut next = state.clone();
    match event {
        SessionEvent::SelectTab(tab) => {
            next.selected_tab = tab;
            next.selected_skill = tab.first_skill();
        }
        SessionEvent::SelectSkill(id) => {
            if state.selected_tab.skill_ids().contains(&id) {
                next.selected_skill = id;
            }
        }
        SessionEvent::ToggleListening => next.listening = !state.listening,
        SessionEvent::TogglePlayback => next.playing = !state.playing,
        SessionEvent::SetLanguage(language) => next.language = language,
        SessionEvent::SetSpeed(speed) => next.speed = speed,
        SessionEvent::SetVoice(voice) => next.voice = voice,
        SessionEvent::ToggleAutoPlay => next.auto_play = !state.auto_play,
        SessionEvent::NextStep => {
            next.step = (state.step + 1).min(TUTORIAL_STEPS.len().saturating_sub(1));
        }
        SessionEvent::PreviousStep => next.step = state.step.saturating_sub(1),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = SessionState::default();
        assert_eq!(s.selected_tab, SkillTab::MySkills);
        assert_eq!(s.selected_skill, MY_SKILLS[0].id);
        assert!(!s.listening);
        assert!(!s.playing);
        assert!(s.auto_play);
        assert_eq!(s.language.to_string(), "English");
        assert_eq!(s.speed.to_string(), "Normal");
        assert_eq!(s.voice.to_string(), "Female");
        assert_eq!(s.step, 0);
    }

    #[test]
    fn test_reduce_does_not_touch_input_state() {
        let s = SessionState::default();
        let next = reduce(&s, SessionEvent::ToggleListening);
        assert!(next.listening);
        assert_eq!(s, SessionState::default());
    }

    #[test]
    fn test_toggle_listening_twice_restores() {
        let s = SessionState::default();
        let once = reduce(&s, SessionEvent::ToggleListening);
        let twice = reduce(&once, SessionEvent::ToggleListening);
        assert_ne!(once, s);
        assert_eq!(twice, s);
    }

    #[test]
    fn test_listening_and_playback_are_independent() {
        let mut s = SessionState::default();
        s.apply(SessionEvent::TogglePlayback);
        assert!(s.playing);
        assert!(!s.listening);
        s.apply(SessionEvent::ToggleListening);
        s.apply(SessionEvent::TogglePlayback);
        assert!(s.listening);
        assert!(!s.playing);
    }

    #[test]
    fn test_auto_play_toggle() {
        let mut s = SessionState::default();
        s.apply(SessionEvent::ToggleAutoPlay);
        assert!(!s.auto_play);
        s.apply(SessionEvent::ToggleAutoPlay);
        assert!(s.auto_play);
    }

    #[test]
    fn test_switching_tabs_resets_selection_to_first_skill() {
        let mut s = SessionState::default();
        s.apply(SessionEvent::SelectSkill(MY_SKILLS[1].id));
        assert_eq!(s.selected_skill, MY_SKILLS[1].id);

        s.apply(SessionEvent::SelectTab(SkillTab::Available));
        assert_eq!(s.selected_skill, CATEGORIES[0].id);

        s.apply(SessionEvent::SelectTab(SkillTab::MySkills));
        assert_eq!(s.selected_tab, SkillTab::MySkills);
        assert_eq!(s.selected_skill, MY_SKILLS[0].id);
    }

    #[test]
    fn test_select_skill_outside_tab_is_ignored() {
        let mut s = SessionState::default();
        s.apply(SessionEvent::SelectSkill(SkillId(5)));
        assert_eq!(s.selected_skill, MY_SKILLS[0].id);

        s.apply(SessionEvent::SelectTab(SkillTab::Available));
        s.apply(SessionEvent::SelectSkill(SkillId(5)));
        assert_eq!(s.selected_skill, SkillId(5));
    }

    #[test]
    fn test_settings() {
        let mut s = SessionState::default();
        s.apply(SessionEvent::SetLanguage(Language::Telugu));
        s.apply(SessionEvent::SetSpeed(PlaybackSpeed::Slow));
        s.apply(SessionEvent::SetVoice(VoiceKind::Male));
        assert_eq!(s.language, Language::Telugu);
        assert_eq!(s.speed, PlaybackSpeed::Slow);
        assert_eq!(s.voice, VoiceKind::Male);
    }

    #[test]
    fn test_tutorial_steps_are_clamped() {
        let mut s = SessionState::default();
        s.apply(SessionEvent::PreviousStep);
        assert_eq!(s.step, 0);
        for _ in 0..TUTORIAL_STEPS.len() + 3 {
            s.apply(SessionEvent::NextStep);
        }
        assert_eq!(s.step, TUTORIAL_STEPS.len() - 1);
    }

    #[test]
    fn test_step_skill_clamps() {
        let mut s = SessionState::default();
        s.step_skill(-1);
        assert_eq!(s.selected_skill, MY_SKILLS[0].id);
        s.step_skill(5);
        assert_eq!(s.selected_skill, MY_SKILLS[MY_SKILLS.len() - 1].id);
    }
}
