mod filter;

pub use filter::{
    build_listing, filter_notes, matches_query, normalize_query, NoteListing, NoteRow,
    SEARCH_PLACEHOLDER,
};
