pub mod s4lru;
