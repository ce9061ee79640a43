use companion::models::{
    listener::StateListener,
    profile::{NO_MATCHING_EVENTS, NO_SKILLS_TRACKED},
    AttendedResult, Catalog, Database, EventId, FileStore, Interest, StateStore,
};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // The state file lands in `companion_data/db/`, the folders are created if needed.
    let files = FileStore::new("companion_data/").unwrap();
    let mut store = StateStore::open(Database::new(files.clone()), Catalog::campus());

    // Anyone else writing the state file (another window, another process) is reported here.
    let (state_transmiter, mut state_listener) = mpsc::channel(16);
    let listener = StateListener::new(Database::new(files), state_transmiter, 500);
    tokio::spawn(listener.start());

    // Ticking checkboxes only touches the draft, saving commits it.
    let mut draft = store.draft();
    draft.toggle(Interest::Technology);
    draft.toggle(Interest::Sports);
    match store.commit_draft(draft) {
        Ok(status) => println!("{status}"),
        Err(e) => println!("Could not save your interests: {e}"),
    }

    print_events(&store);

    for id in [EventId(1), EventId(4), EventId(1), EventId(42)] {
        match store.mark_attended(id) {
            Ok(AttendedResult::Recorded) => println!("Marked {id} as attended"),
            Ok(AttendedResult::AlreadyAttended) => println!("{id} was already attended"),
            Ok(AttendedResult::UnknownEvent) => println!("There is no event {id}"),
            Err(e) => println!("Attendance kept for this session only: {e}"),
        }
    }

    print_profile(&store);

    // Pick up our own writes (and anyone else's) for a moment before leaving.
    while let Ok(Some(state)) =
        tokio::time::timeout(std::time::Duration::from_secs(1), state_listener.recv()).await
    {
        store.adopt(state);
    }
}

fn print_events(store: &StateStore<FileStore>) {
    let events = store.visible_events();
    if events.is_empty() {
        println!("{NO_MATCHING_EVENTS}");
        return;
    }
    for event in events {
        let skills: Vec<_> = event.skills.iter().map(|s| s.name()).collect();
        let mark = if store.is_attended(event.id) {
            "Marked as attended"
        } else {
            "Mark as attended"
        };
        println!(
            "{} [{}] {} | Skills: {} | {}",
            event.title,
            event.interest,
            event.date,
            skills.join(", "),
            mark
        );
    }
}

fn print_profile(store: &StateStore<FileStore>) {
    let profile = store.skill_profile();
    if profile.is_empty() {
        println!("{NO_SKILLS_TRACKED}");
    }
    for entry in profile {
        println!("{}: {}", entry.skill, entry);
    }
    for bullet in store.resume_bullets() {
        println!("- {bullet}");
    }
}
