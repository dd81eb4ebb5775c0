//! Built-in prompt templates.

use chain_core::{PromptTemplate, Role};

/// English-to-X translation prompt. Requires `language` and `text`.
pub fn translation_template() -> PromptTemplate {
    PromptTemplate::from_messages(vec![
        (Role::System, "you are an expert at languages."),
        (
            Role::User,
            "convert the following from English to {language}: {text}.",
        ),
    ])
}

/// General question-answering prompt. Requires `input`.
pub fn qa_template() -> PromptTemplate {
    PromptTemplate::from_messages(vec![
        (
            Role::System,
            "You are a helpful assistant, please respond to the question asked.",
        ),
        (Role::User, "Question: {input}"),
    ])
}
