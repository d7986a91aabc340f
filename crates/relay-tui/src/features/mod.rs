//! Feature slices (state + update + render per screen).

pub mod home;
pub mod login;
