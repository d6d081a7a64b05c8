//! Sign-up form with two floating inputs.
//!
//! tab / shift+tab move between fields, enter submits, esc quits.

use bubbletea_rs::{batch, quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::KeyCode;
use floating_input::floatinginput::{HintFrameMsg, Renderer as _};
use floating_input::prelude::*;
use lipgloss_extras::prelude::*;

const WIDTH: usize = 40;

struct SignUp {
    inputs: Vec<FloatingInput>,
    focus: usize,
    done: bool,
}

impl SignUp {
    fn new() -> Self {
        let mut email = floating_input_new();
        email.configure(
            Settings::new()
                .with_placeholder("Email")
                .with_icon("✉")
                .with_input_type(InputType::Email)
                .with_max_length(40)
                .with_input_type_violation(InputViolation::new("Not a valid address"))
                .with_max_length_violation(InputViolation::new("40 characters at most"))
                .with_keyboard_type(KeyboardType::EmailAddress),
        );
        email.set_width(WIDTH);

        let mut password = floating_input_new();
        password.configure(
            Settings::new()
                .with_placeholder("Password")
                .with_icon("🔒")
                .with_secure(true)
                .with_max_length(24)
                .with_max_length_violation(InputViolation::new("24 characters at most"))
                .with_manual_warning_policy(ManualWarningPolicy::ClearOnValid),
        );
        password.set_width(WIDTH);

        Self {
            inputs: vec![email, password],
            focus: 0,
            done: false,
        }
    }

    fn move_focus(&mut self, forward: bool) -> Option<Cmd> {
        let count = self.inputs.len();
        self.inputs[self.focus].blur();
        let mut cmds: Vec<Cmd> = self.inputs[self.focus].take_deferred_cmd().into_iter().collect();

        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
        cmds.extend(self.inputs[self.focus].focus());
        Some(batch(cmds))
    }

    fn submit(&mut self) -> Option<Cmd> {
        let mut ok = true;
        for input in &mut self.inputs {
            if input.text().is_none() {
                input.trigger_warning(Some("Required"));
                ok = false;
            } else if input.status().is_violated() {
                ok = false;
            }
        }
        if ok {
            self.done = true;
            return Some(quit());
        }
        let cmds: Vec<Cmd> = self
            .inputs
            .iter_mut()
            .filter_map(|input| input.take_deferred_cmd())
            .collect();
        Some(batch(cmds))
    }
}

impl Model for SignUp {
    fn init() -> (Self, Option<Cmd>) {
        let mut form = SignUp::new();
        let cmd = form.inputs[0].focus();
        (form, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Esc => return Some(quit()),
                KeyCode::Tab => return self.move_focus(true),
                KeyCode::BackTab => return self.move_focus(false),
                KeyCode::Enter => return self.submit(),
                _ => {}
            }
        }

        // A blurred input may still be fading its hint out.
        if msg.is::<HintFrameMsg>() {
            let cmds: Vec<Cmd> = self
                .inputs
                .iter_mut()
                .filter_map(|input| input.renderer_mut().update(&msg))
                .collect();
            return Some(batch(cmds));
        }

        self.inputs[self.focus].update(msg)
    }

    fn view(&self) -> String {
        let title = Style::new()
            .bold(true)
            .foreground(Color::from("#2196F3"))
            .render("Create an account");
        let help = Style::new()
            .faint(true)
            .render("tab next • shift+tab previous • enter submit • esc quit");

        let mut out = vec![title, String::new()];
        for input in &self.inputs {
            out.push(input.view());
            out.push(String::new());
        }
        if self.done {
            out.push("Welcome aboard.".to_string());
        }
        out.push(help);
        out.join("\n")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<SignUp>::builder().build()?;
    program.run().await?;
    Ok(())
}
