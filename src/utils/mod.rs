pub mod invitation;
pub mod links;
pub mod rsvp;
pub mod songs;
pub mod ui_state;
