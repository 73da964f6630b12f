mod tracks;

pub use tracks::TrackStore;
