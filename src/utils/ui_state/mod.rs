//! Client-side state of the invitation page, kept here so the contract is
//! shared with the frontend: a one-way entry gate, a single-slot modal
//! selector and a session cache of the verified confirmation. Only the two
//! boolean flags survive a reload.

use crate::routes::rsvp::models::GuestEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const AUDIO_PREF_KEY: &str = "wedding-invitation-audio";
pub const GATE_PASSED_KEY: &str = "wedding-invitation-gate-passed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    Rsvp,
    DressCode,
    Tips,
    Gifts,
    Gallery,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UiState {
    audio_enabled: bool,
    gate_passed: bool,
    open_modal: Option<ModalId>,
    gallery_index: Option<usize>,
    confirmed_guests: Option<Vec<GuestEntry>>,
}

impl UiState {
    pub fn hydrate(flags: PersistedFlags) -> Self {
        Self {
            audio_enabled: flags.audio_enabled,
            gate_passed: flags.gate_passed,
            ..Self::default()
        }
    }

    pub fn persisted(&self) -> PersistedFlags {
        PersistedFlags {
            audio_enabled: self.audio_enabled,
            gate_passed: self.gate_passed,
        }
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
    }

    pub fn gate_passed(&self) -> bool {
        self.gate_passed
    }

    /// One-way transition, there is no way back to the gate.
    pub fn pass_gate(&mut self) {
        self.gate_passed = true;
    }

    pub fn open_modal(&self) -> Option<ModalId> {
        self.open_modal
    }

    /// Opening a modal implicitly closes any other.
    pub fn show_modal(&mut self, id: ModalId) {
        self.open_modal = Some(id);
        self.gallery_index = None;
    }

    pub fn show_gallery(&mut self, index: usize) {
        self.open_modal = Some(ModalId::Gallery);
        self.gallery_index = Some(index);
    }

    pub fn set_gallery_index(&mut self, index: usize) {
        if self.open_modal == Some(ModalId::Gallery) {
            self.gallery_index = Some(index);
        }
    }

    /// Meaningful only while the gallery modal is open.
    pub fn gallery_index(&self) -> Option<usize> {
        match self.open_modal {
            Some(ModalId::Gallery) => self.gallery_index,
            _ => None,
        }
    }

    pub fn close_modal(&mut self) {
        self.open_modal = None;
        self.gallery_index = None;
    }

    pub fn cache_confirmation(&mut self, guests: Vec<GuestEntry>) {
        self.confirmed_guests = Some(guests);
    }

    pub fn confirmed_guests(&self) -> Option<&[GuestEntry]> {
        self.confirmed_guests.as_deref()
    }
}

/// The persistence boundary: exactly these two flags are written to local
/// storage, everything else resets on reload.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PersistedFlags {
    pub audio_enabled: bool,
    pub gate_passed: bool,
}

impl PersistedFlags {
    pub fn write_to(&self, storage: &mut BTreeMap<String, String>) {
        storage.insert(AUDIO_PREF_KEY.to_string(), self.audio_enabled.to_string());
        storage.insert(GATE_PASSED_KEY.to_string(), self.gate_passed.to_string());
    }

    pub fn read_from(storage: &BTreeMap<String, String>) -> Self {
        let flag = |key: &str| storage.get(key).map(|v| v == "true").unwrap_or(false);
        Self {
            audio_enabled: flag(AUDIO_PREF_KEY),
            gate_passed: flag(GATE_PASSED_KEY),
        }
    }
}

#[cfg(test)]
mod ui_state_tests {
    use super::*;

    #[test]
    fn gate_starts_closed_and_passing_is_one_way() {
        let mut state = UiState::default();
        assert!(!state.gate_passed());

        state.pass_gate();
        state.set_audio_enabled(true);
        state.close_modal();
        assert!(state.gate_passed());
    }

    #[test]
    fn opening_a_modal_closes_the_previous_one() {
        let mut state = UiState::default();

        state.show_modal(ModalId::Rsvp);
        assert_eq!(state.open_modal(), Some(ModalId::Rsvp));

        state.show_modal(ModalId::DressCode);
        assert_eq!(state.open_modal(), Some(ModalId::DressCode));

        state.close_modal();
        assert_eq!(state.open_modal(), None);
    }

    #[test]
    fn gallery_index_is_scoped_to_the_gallery_modal() {
        let mut state = UiState::default();

        state.show_gallery(3);
        assert_eq!(state.gallery_index(), Some(3));

        state.set_gallery_index(5);
        assert_eq!(state.gallery_index(), Some(5));

        state.show_modal(ModalId::Gifts);
        assert_eq!(state.gallery_index(), None);

        // Changing the index with the gallery closed is a no-op.
        state.set_gallery_index(1);
        assert_eq!(state.gallery_index(), None);
    }

    #[test]
    fn only_the_two_flags_survive_a_reload() {
        let mut state = UiState::default();
        state.pass_gate();
        state.set_audio_enabled(true);
        state.show_gallery(2);
        state.cache_confirmation(vec![GuestEntry::attending("Juan García")]);

        let mut storage = BTreeMap::new();
        state.persisted().write_to(&mut storage);
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get(AUDIO_PREF_KEY).map(String::as_str), Some("true"));
        assert_eq!(storage.get(GATE_PASSED_KEY).map(String::as_str), Some("true"));

        let reloaded = UiState::hydrate(PersistedFlags::read_from(&storage));
        assert!(reloaded.audio_enabled());
        assert!(reloaded.gate_passed());
        assert_eq!(reloaded.open_modal(), None);
        assert_eq!(reloaded.gallery_index(), None);
        assert_eq!(reloaded.confirmed_guests(), None);
    }

    #[test]
    fn empty_storage_hydrates_to_defaults() {
        let storage = BTreeMap::new();
        let state = UiState::hydrate(PersistedFlags::read_from(&storage));
        assert_eq!(state, UiState::default());
    }
}
