use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::message::THINKING;
use super::session::{ChatSession, ReplyOutcome};
use super::ui;
use crate::api::AssistantClient;
use crate::config::ResolvedConfig;
use crate::i18n::{Bundle, Language};
use crate::ui::{Spinner, Style};

/// Interactive chat widget.
///
/// Reads lines with a REPL-style prompt, feeds them to a [`ChatSession`] and
/// prints each settled reply.
pub struct ChatWidget {
    config: ResolvedConfig,
    client: AssistantClient,
    session: ChatSession,
}

impl ChatWidget {
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let client = AssistantClient::new(config.endpoint.clone(), config.timeout)?;
        let session = ChatSession::new(config.language);
        Ok(Self {
            config,
            client,
            session,
        })
    }

    pub const fn session(&self) -> &ChatSession {
        &self.session
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.session.bundle());
        self.print_history();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let help = help_message(self.session.bundle());
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder(self.session.bundle().chat.placeholder)
                .with_help_message(&help)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.submit(text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Sends one line and prints whatever replaced the placeholder.
    ///
    /// Ctrl+C while waiting abandons the request.
    async fn submit(&mut self, text: String) {
        // Once registered, the listener keeps SIGINT from terminating the
        // process. The prompt runs in raw mode and reads Ctrl+C as a key, so
        // quitting still goes through `OperationInterrupted`.
        self.submit_until(text, tokio::signal::ctrl_c()).await;
    }

    /// Like [`submit`](Self::submit), but abandons the request as soon as
    /// `cancel` completes.
    async fn submit_until<F: Future>(&mut self, text: String, cancel: F) {
        self.session.update_input(text);
        let Some(ticket) = self.session.begin_send() else {
            return;
        };
        let request = ticket.request().clone();

        let spinner = Spinner::new(THINKING);
        tokio::select! {
            result = self.client.send(&request) => {
                spinner.stop();
                self.session.settle(ticket, ReplyOutcome::from_result(result));
            }
            _ = cancel => {
                spinner.stop();
                self.session.cancel();
            }
        }

        if let Some(reply) = self.session.last_message() {
            ui::print_message(reply, self.session.bundle());
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.session.language().code());
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Lang(target) => {
                self.switch_language(target);
                true
            }
            SlashCommand::InvalidLang(code) => {
                ui::print_error(&format!("Unsupported language: {code}"));
                println!("Available: ru, en");
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn switch_language(&mut self, target: Option<Language>) {
        let language = target.unwrap_or_else(|| self.session.language().toggle());

        if !self.session.set_language(language) {
            println!(
                "{} Language is already {}",
                Style::success("✓"),
                Style::value(language)
            );
            return;
        }

        println!(
            "{} Language set to {}\n",
            Style::success("✓"),
            Style::value(language)
        );
        ui::print_header(self.session.bundle());
        self.print_history();
    }

    fn print_history(&self) {
        let bundle = self.session.bundle();
        for message in self.session.messages() {
            ui::print_message(message, bundle);
        }
    }
}

/// Key hint shown under the prompt, labelled in the session language.
fn help_message(bundle: &Bundle) -> String {
    format!("Enter: {}, /help for commands, Ctrl+C to quit", bundle.chat.send)
}
