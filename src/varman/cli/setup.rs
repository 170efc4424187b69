use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "varman", bin_name = "varman", version)]
#[command(about = "Arrange product filters and their image variants", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global board instead of the project one
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    #[command(alias = "ls", display_order = 1)]
    Show {
        /// Print the stored JSON instead of the grid
        #[arg(long)]
        json: bool,
    },

    /// Add a product filter at the end of the board
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Label words (joined with spaces; defaults to the configured label)
        #[arg(trailing_var_arg = true)]
        label: Vec<String>,
    },

    /// Delete a product filter
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Filter id (as shown in the first column)
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Add a variant column to every filter
    #[command(alias = "col", display_order = 4)]
    Column,

    /// Set a variant slot's image by url and name
    #[command(display_order = 5)]
    Set {
        /// Filter row position (1-based)
        filter: usize,

        /// Variant column position (1-based)
        variant: usize,

        /// Image url
        url: String,

        /// Image name words
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// Set a variant slot's image from the catalog
    #[command(display_order = 6)]
    Pick {
        /// Filter row position (1-based)
        filter: usize,

        /// Variant column position (1-based)
        variant: usize,

        /// Catalog image number (see `images`)
        image: u32,
    },

    /// Remove a variant slot's image
    #[command(display_order = 7)]
    Clear {
        /// Filter row position (1-based)
        filter: usize,

        /// Variant column position (1-based)
        variant: usize,
    },

    /// Rename a product filter
    #[command(display_order = 8)]
    Rename {
        /// Filter id
        id: String,

        /// New label words
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        label: Vec<String>,
    },

    /// Move a filter to another filter's position
    #[command(alias = "mv", display_order = 9)]
    Move {
        /// Id of the filter to move
        source: String,

        /// Id of the filter whose position it takes
        target: String,
    },

    /// Search the image catalog
    #[command(alias = "search", display_order = 10)]
    Images {
        /// Search words (empty lists every image)
        #[arg(trailing_var_arg = true)]
        term: Vec<String>,
    },

    /// Discard the saved board and start over from the default board
    #[command(display_order = 11)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the board as pretty JSON
    #[command(display_order = 12)]
    Export,

    /// Get or set configuration
    #[command(display_order = 13)]
    Config {
        /// Configuration key (storage-key, catalog-size, image-url, default-label)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("varman").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_command_defaults_to_none() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_joins_label_words() {
        match parse(&["add", "Frame", "Color"]).command {
            Some(Commands::Add { label }) => assert_eq!(label.join(" "), "Frame Color"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn set_takes_multiword_name() {
        match parse(&["set", "1", "2", "https://picsum.photos/id/5/200", "Image", "5"]).command {
            Some(Commands::Set {
                filter,
                variant,
                url,
                name,
            }) => {
                assert_eq!((filter, variant), (1, 2));
                assert_eq!(url, "https://picsum.photos/id/5/200");
                assert_eq!(name.join(" "), "Image 5");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = parse(&["mv", "3", "1", "--global"]);
        assert!(cli.global);
        assert!(matches!(cli.command, Some(Commands::Move { .. })));

        let cli = parse(&["-v", "rm", "2", "-y"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Delete { yes: true, .. })));
    }

    #[test]
    fn pick_rejects_non_numeric_image() {
        assert!(Cli::try_parse_from(["varman", "pick", "1", "1", "five"]).is_err());
    }
}
