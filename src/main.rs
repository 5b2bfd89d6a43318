mod diary_entry;
mod diary_store;
mod projects;
mod skills;
mod ui;
mod validation;

use color_eyre::Result;
use diary_store::DiaryStore;
use ui::{Action, UI};

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut store = DiaryStore::load(diary_store::SLOT_FILE);
    let mut ui = UI::new()?;

    loop {
        ui.display(&store)?;

        if let Some(action) = ui.handle_input(&store)? {
            match action {
                Action::AddEntry => {
                    if let Some(draft) = ui.add_entry_form()? {
                        store.add(&draft.title, draft.date, Some(draft.status));
                        ui.notify("Запись успешно добавлена в дневник!");
                    }
                }
                Action::DeleteEntry => {
                    if let Some(entry) = ui.select_entry_to_delete(&store.sorted_for_display())? {
                        if store.delete(&entry.id) {
                            ui.notify(format!("Запись \"{}\" успешно удалена!", entry.title));
                        }
                    }
                }
                Action::Projects => ui.browse_projects()?,
                Action::Skills => ui.show_skills()?,
                Action::Contact => {
                    if ui.contact_form()? {
                        ui.notify("Сообщение успешно отправлено!");
                    }
                }
                Action::Quit => break,
            }
        }
    }

    Ok(())
}
