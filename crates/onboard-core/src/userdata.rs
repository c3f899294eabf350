use anyhow::Context;
use onboard_shared::{Email, HomeScreen, HomeScreenItemData, HomeScreenTodo, PhoneNumber, TodoType};
use tracing::{debug, instrument};

/// Account details some cards need to name.
pub trait UserDataSource {
    fn phone_numbers(&self) -> anyhow::Result<Vec<PhoneNumber>>;

    fn emails(&self) -> anyhow::Result<Vec<Email>>;
}

#[instrument(skip_all, fields(todo_type = %todo.todo_type))]
fn fill_todo(todo: &mut HomeScreenTodo, source: &dyn UserDataSource) -> anyhow::Result<()> {
    let picked = match TodoType::parse(&todo.todo_type) {
        | Some(TodoType::VerifyAllPhoneNumber) => source
            .phone_numbers()?
            .into_iter()
            .find(|number| !number.superseded && !number.verified)
            .map(|number| number.phone_number),
        | Some(TodoType::VerifyAllEmail) => source
            .emails()?
            .into_iter()
            .find(|email| !email.is_verified)
            .map(|email| email.email),
        | Some(TodoType::LegacyEmailVisibility) => source
            .emails()?
            .into_iter()
            .find(|email| email.is_primary)
            .map(|email| email.email),
        | _ => return Ok(()),
    };

    debug!(found = picked.is_some(), "filled user data");
    if picked.is_some() {
        todo.user_data = picked;
    }
    Ok(())
}

/// Fills `userData` on the todo items that name a specific email or phone
/// number. Items without a match keep whatever they had.
#[instrument(skip_all, fields(items = home.items.len()))]
pub fn fill_user_data(home: &mut HomeScreen, source: &dyn UserDataSource) -> anyhow::Result<()> {
    for item in &mut home.items {
        let HomeScreenItemData::Todo(todo) = &mut item.data else {
            continue;
        };
        let todo_type = todo.todo_type.clone();
        fill_todo(todo, source)
            .with_context(|| format!("failed to load user data for {todo_type} todo"))?;
    }
    Ok(())
}
