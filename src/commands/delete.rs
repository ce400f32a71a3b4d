use anyhow::Result;
use eventcal_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &EventStore, id: &str) -> Result<()> {
    let event = store.get(id)?;
    store.delete(id)?;

    println!("{}", format!("  Deleted: {} ({})", event.title, event.date).red());

    if let Some(group_id) = &event.repeat.group_id {
        let remaining = store.group(group_id)?.len();
        if remaining > 0 {
            println!(
                "{}",
                format!("  {} other occurrences of this event were kept", remaining).dimmed()
            );
        }
    }

    Ok(())
}
