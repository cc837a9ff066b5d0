use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(anyhow!("Unsupported language '{}' (expected pt-br or en)", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-br"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Every string the dashboard shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub created: &'static str,
    pub completed: &'static str,
    /// Connective in "1 de 2".
    pub of: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub required_field: &'static str,
    pub help_editing: &'static str,
    pub help_normal: &'static str,
}

const PT_BR: Labels = Labels {
    title: "Lista de tarefas",
    placeholder: "Adicione uma nova tarefa",
    submit: "Criar",
    created: "Tarefas criadas",
    completed: "Concluídas",
    of: "de",
    empty_title: "Você ainda não tem tarefas cadastradas",
    empty_hint: "Crie tarefas e organize seus itens a fazer",
    required_field: "Esse campo é obrigatório",
    help_editing: "Enter: criar | Esc: lista | Ctrl-C: sair",
    help_normal: "j/k: navegar | Espaço: concluir | d: excluir | a: nova tarefa | q: sair",
};

const EN: Labels = Labels {
    title: "To-do list",
    placeholder: "Add a new task",
    submit: "Create",
    created: "Created tasks",
    completed: "Completed",
    of: "of",
    empty_title: "You don't have any tasks yet",
    empty_hint: "Create tasks and organize your to-do items",
    required_field: "This field is required",
    help_editing: "Enter: create | Esc: list | Ctrl-C: quit",
    help_normal: "j/k: navigate | Space: complete | d: delete | a: new task | q: quit",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }
}
