pub mod invitation;
pub mod rsvp;
pub mod songs;
