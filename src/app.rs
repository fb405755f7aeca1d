//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate
//! command handlers.

use crate::commands;
use crate::logging;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process;

/// A terminal media workbench: extract, transcribe, and polish
#[derive(Parser)]
#[command(name = "mediascribe")]
#[command(version)]
#[command(about = "Extract audio from any media, transcribe it with cloud AI, and polish the text")]
#[command(
    long_about = "A terminal media workbench.\n\nIngest audio or video files (or record from the microphone), extract the \naudio track locally with ffmpeg, transcribe it with your configured AI \nprovider, and optionally clean up the result with grammar correction or \nstyle rewriting.\n\nDEFAULT COMMAND:\n    If no command is specified, 'record' is used by default.\n    Record options (-c, -o) can be used without explicitly saying 'record'.\n\nEXAMPLES:\n    # Record from the microphone and pipe the transcript\n    $ mediascribe | wc -w\n    \n    # Transcribe a video; only the extracted WAV is uploaded\n    $ mediascribe transcribe interview.mp4\n    \n    # Extract the audio track without transcribing\n    $ mediascribe extract lecture.mkv -o lecture.wav\n    \n    # Fix grammar in a transcript\n    $ mediascribe transcribe memo.ogg | mediascribe correct\n    \n    # Rewrite text formally, with a heavy hand\n    $ mediascribe rewrite --style formal --intensity 0.9 --file draft.txt\n    \n    # Set up authentication and select a model\n    $ mediascribe auth"
)]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/mediascribe/mediascribe.toml\n    Logs:               ~/.local/state/mediascribe/mediascribe.log.*\n\nFor more information, visit: https://github.com/jonasmelker/mediascribe"
)]
struct Cli {
    /// Copy result to clipboard instead of stdout (record default command)
    #[arg(short, long, global = true)]
    clipboard: bool,

    /// Write result to file instead of stdout (record default command)
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record from the microphone and transcribe (default)
    ///
    /// Press Enter to stop recording and transcribe. By default the
    /// transcript goes to stdout for piping to other commands.
    #[command(visible_alias = "r")]
    Record {
        /// Copy transcript to clipboard instead of stdout
        #[arg(short, long)]
        clipboard: bool,

        /// Write transcript to file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Also keep the recorded audio as a WAV file
        #[arg(long, value_name = "WAV")]
        save_audio: Option<PathBuf>,
    },

    /// Transcribe a media file
    ///
    /// Accepts any audio or video file ffmpeg can read. The audio track is
    /// extracted and encoded as WAV locally before upload, so video payloads
    /// never leave the machine.
    ///
    /// Examples:
    ///   mediascribe transcribe interview.mp4
    ///   mediascribe transcribe voice-memo.mp3 -c
    ///   mediascribe transcribe meeting.wav -o transcript.txt
    #[command(visible_alias = "t")]
    Transcribe {
        /// Path to the media file to transcribe
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Copy transcript to clipboard instead of stdout
        #[arg(short, long)]
        clipboard: bool,

        /// Write transcript to file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,
    },

    /// Extract a media file's audio track to WAV
    ///
    /// Purely local: decodes with ffmpeg and writes canonical 16-bit PCM
    /// WAV. Prints the output path on success.
    #[command(visible_alias = "x")]
    Extract {
        /// Path to the media file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Destination WAV path (defaults to FILE with a .wav extension)
        #[arg(short, long, value_name = "WAV")]
        output: Option<PathBuf>,
    },

    /// Correct grammar, spelling, and punctuation
    ///
    /// Takes text as an argument, from --file, or from stdin. Preserves
    /// wording and meaning; outputs only the corrected text.
    #[command(visible_alias = "fix")]
    Correct {
        /// Text to correct (reads stdin if omitted and --file not given)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Copy result to clipboard instead of stdout
        #[arg(short, long)]
        clipboard: bool,

        /// Write result to file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,
    },

    /// Rewrite text in a target style at a tunable intensity
    ///
    /// Styles: formal, casual, academic, creative, concise.
    /// Intensity 0.0 barely touches the text; 1.0 allows a full rewrite.
    /// Defaults come from the [rewrite] section of the config file.
    #[command(visible_alias = "rw")]
    Rewrite {
        /// Text to rewrite (reads stdin if omitted and --file not given)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Target style
        #[arg(short, long, value_name = "STYLE")]
        style: Option<String>,

        /// Rewrite intensity between 0.0 and 1.0
        #[arg(short, long, value_name = "LEVEL")]
        intensity: Option<f32>,

        /// Copy result to clipboard instead of stdout
        #[arg(short, long)]
        clipboard: bool,

        /// Write result to file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,
    },

    /// Authenticate with a provider and select a model
    ///
    /// Configure your AI provider credentials and choose which transcription
    /// model to use. Handles both provider selection and API key management
    /// in one flow.
    #[command(visible_alias = "a")]
    Auth,

    /// List or show previous results
    ///
    /// Without an id, lists recent transcripts, corrections, and rewrites.
    /// With an id, prints that entry's full text for piping.
    #[command(visible_alias = "h")]
    History {
        /// Entry id to print in full
        #[arg(value_name = "ID")]
        id: Option<i64>,
    },

    /// Open configuration file in your preferred editor
    ///
    /// Edit audio settings, rewrite defaults, and provider options.
    /// Uses $EDITOR environment variable or falls back to nano/vim.
    #[command(visible_alias = "c")]
    Config,

    /// List available audio input devices
    ///
    /// Shows device IDs, names, and configurations to help configure
    /// the correct input device in mediascribe.toml.
    #[command(name = "list-devices")]
    ListDevices,

    /// Show recent log entries from the application
    ///
    /// Display the last 50 lines of the most recent log file.
    /// Useful for troubleshooting issues.
    Logs,

    /// Generate shell completion script
    ///
    /// Generate completion script for your shell. Save the output to your
    /// shell's completion directory or source it directly.
    ///
    /// Examples:
    ///   mediascribe completions bash > mediascribe.bash
    ///   mediascribe completions zsh > _mediascribe
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the main application based on command-line arguments.
///
/// # Errors
/// - If logging initialization fails
/// - If command execution fails
pub async fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Handle commands that don't need logging or config setup
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "mediascribe", &mut io::stdout());
            return Ok(());
        }
        Some(Commands::ListDevices) => {
            return match commands::handle_list_devices() {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
        }
        Some(Commands::Logs) => {
            return match commands::handle_logs() {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
        }
        _ => {}
    }

    // Initialize logging for all other commands
    logging::init_logging()?;

    // Route to appropriate command handler
    match cli.command {
        None | Some(Commands::Record { .. }) => {
            // Default command is record
            // If both top-level and explicit record options are specified,
            // the explicit record command options take precedence
            let (clipboard, output, save_audio) = match cli.command {
                Some(Commands::Record {
                    clipboard,
                    output,
                    save_audio,
                }) => (clipboard, output, save_audio),
                None => (cli.clipboard, cli.output, None),
                _ => unreachable!(),
            };
            commands::handle_record(clipboard, output, save_audio).await?;
        }
        Some(Commands::Transcribe {
            file,
            clipboard,
            output,
        }) => {
            commands::handle_transcribe(file, clipboard, output).await?;
        }
        Some(Commands::Extract { file, output }) => {
            commands::handle_extract(file, output)?;
        }
        Some(Commands::Correct {
            text,
            file,
            clipboard,
            output,
        }) => {
            commands::handle_correct(text, file, clipboard, output).await?;
        }
        Some(Commands::Rewrite {
            text,
            file,
            style,
            intensity,
            clipboard,
            output,
        }) => {
            commands::handle_rewrite(text, file, style, intensity, clipboard, output).await?;
        }
        Some(Commands::Auth) => {
            if let Err(e) = commands::handle_auth().await {
                // Check if it's a cancellation error (cliclack already displayed the message)
                let err_msg = e.to_string();
                if err_msg.contains("cancelled") || err_msg.contains("interrupted") {
                    process::exit(0);
                } else {
                    return Err(e);
                }
            }
        }
        Some(Commands::History { id }) => {
            commands::handle_history(id)?;
        }
        Some(Commands::Config) => {
            commands::handle_config()?;
        }
        Some(Commands::Completions { .. }) | Some(Commands::ListDevices) | Some(Commands::Logs) => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}
