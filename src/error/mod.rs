mod vocalis;

pub use vocalis::VocalisError;
