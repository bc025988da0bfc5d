mod add_form;
mod view;

pub use view::RosterListPage;
