use tracing::info;

use super::{prompt, prompt_number, Reporter};
use crate::services::Authenticator;

/// Цикл входа: повторяет меню, пока пользователь не залогинится.
pub struct AuthUi<'a, R: Reporter> {
    authenticator: &'a mut Authenticator,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> AuthUi<'a, R> {
    pub fn new(authenticator: &'a mut Authenticator, reporter: &'a mut R) -> Self {
        AuthUi {
            authenticator,
            reporter,
        }
    }

    pub fn run(&mut self) {
        self.reporter.report("Добро пожаловать!");

        loop {
            println!("\nВыберите действие:");
            println!("1. Зарегистрироваться");
            println!("2. Войти");

            match prompt_number("") {
                1 => self.register(),
                2 => {
                    if self.login() {
                        return;
                    }
                }
                _ => self.reporter.report("Некорректный ввод. Попробуйте еще раз."),
            }
        }
    }

    fn register(&mut self) {
        let username = prompt("Введите имя пользователя:");
        let password = prompt("Введите пароль:");
        self.authenticator.register(&username, &password);
        self.reporter
            .report(&format!("Пользователь {username} успешно зарегистрирован."));
    }

    fn login(&mut self) -> bool {
        let username = prompt("Введите имя пользователя:");
        let password = prompt("Введите пароль:");

        if self.authenticator.authenticate(&username, &password) {
            info!(username = %username, "user logged in");
            self.reporter
                .report(&format!("Пользователь {username} успешно вошел в систему."));
            true
        } else {
            self.reporter
                .report("Ошибка входа. Неверное имя пользователя или пароль.");
            false
        }
    }
}
