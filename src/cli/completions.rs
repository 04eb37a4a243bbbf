use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    satchel completions bash > ~/.bash_completion.d/satchel\n\n\
                  Generate zsh completions:\n    satchel completions zsh > ~/.zfunc/_satchel\n\n\
                  Generate fish completions:\n    satchel completions fish > ~/.config/fish/completions/satchel.fish\n\n\
                  Generate PowerShell completions:\n    satchel completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
