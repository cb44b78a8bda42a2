// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod attendance;
    pub mod ports;
    pub mod schedule;
    pub mod week_window;
}

pub mod application {
    pub mod errors;
    pub mod identity_resolver;
    pub mod orchestrator;
    pub mod projector;
    pub mod reconciler;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_attendance_source;
        pub mod in_memory_directory_source;
        pub mod in_memory_schedule_store;
    }
}

pub mod shell {
    pub mod config;
}
