//! `src/{pkg}/app.py` - the Textual application entry point

use crate::options::ScaffoldOptions;

/// Render a minimal Textual app: a label, an input, Submit/Cancel buttons,
/// `q` to quit and `d` to toggle dark mode.
pub fn render_app(options: &ScaffoldOptions) -> String {
    format!(
        r#""""Entry point for the {package} Textual application."""

from textual.app import App, ComposeResult
from textual.containers import Container, Horizontal
from textual.widgets import Button, Header, Footer, Label, Input
from textual.binding import Binding


class MyTextualApp(App):
    """Main Textual application."""

    CSS = """
    Screen {{
        background: $surface;
    }}

    Container {{
        padding: 1;
    }}

    Label {{
        margin: 1;
    }}

    Button {{
        margin: 1;
    }}
    """

    BINDINGS = [
        Binding("q", "quit", "Quit", priority=True),
        Binding("d", "toggle_dark", "Toggle dark mode"),
    ]

    def compose(self) -> ComposeResult:
        yield Header()
        yield Container(
            Label("Welcome to Textual App!"),
            Input(placeholder="Enter text here..."),
            Horizontal(
                Button("Submit", id="submit", variant="primary"),
                Button("Cancel", id="cancel", variant="default"),
            ),
        )
        yield Footer()

    def on_button_pressed(self, event: Button.Pressed) -> None:
        if event.button.id == "submit":
            self.notify("Submit clicked!")
        elif event.button.id == "cancel":
            self.exit()

    def action_toggle_dark(self) -> None:
        self.dark = not self.dark


def main() -> None:
    app = MyTextualApp()
    app.run()


if __name__ == "__main__":
    main()
"#,
        package = options.package_name()
    )
}
