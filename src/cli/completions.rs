use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillset completions bash > ~/.bash_completion.d/skillset\n\n\
                  Generate zsh completions:\n    skillset completions zsh > ~/.zfunc/_skillset\n\n\
                  Generate fish completions:\n    skillset completions fish > ~/.config/fish/completions/skillset.fish\n\n\
                  Generate PowerShell completions:\n    skillset completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
