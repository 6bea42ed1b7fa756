use super::{login, logout, portfolio, register, Action};
use anyhow::Result;

pub(super) async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => login::handle(args).await,
        Action::Register(args) => register::handle(args).await,
        Action::Portfolio(args) => portfolio::handle(&args),
        Action::Logout(args) => logout::handle(&args),
    }
}
