use clap::Parser;

/// Verify HMAC-signed messages over HTTP
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Telemetry URL (disabled as default)
    #[clap(long)]
    pub telemetry_url: Option<String>,

    /// Shared secret key (required)
    #[clap(long)]
    pub secret_key: Option<String>,

    /// Bind IP (127.0.0.1:3000 as default)
    #[clap(long)]
    pub bind_ip: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: SubCommand,
}

#[derive(Parser, Debug)]
pub enum SubCommand {
    /// Run server
    Serve,
    /// Print the signature of a message
    Sign(SignCommand),
    /// Sign a message and send it to a server
    Send(SendCommand),
}

#[derive(Parser, Debug)]
pub struct SignCommand {
    /// Message to sign
    #[clap(long)]
    pub message: String,

    /// Timestamp in seconds since the Unix epoch (current time as default)
    #[clap(long, allow_hyphen_values = true)]
    pub timestamp: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct SendCommand {
    /// Server URL
    #[clap(long)]
    pub url: String,

    /// Message to sign
    #[clap(long)]
    pub message: String,

    /// Timestamp in seconds since the Unix epoch (current time as default)
    #[clap(long, allow_hyphen_values = true)]
    pub timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{Args, SubCommand};

    #[test]
    fn test_parse_serve() {
        let args = Args::try_parse_from([
            "sigverify",
            "--secret-key",
            "key",
            "--bind-ip",
            "0.0.0.0:8080",
            "serve",
        ])
        .unwrap();

        assert_eq!(args.secret_key.as_deref(), Some("key"));
        assert_eq!(args.bind_ip.as_deref(), Some("0.0.0.0:8080"));
        assert_matches!(args.command, SubCommand::Serve);
    }

    #[test]
    fn test_parse_sign() {
        let args =
            Args::try_parse_from(["sigverify", "sign", "--message", "hello", "--timestamp", "1000"])
                .unwrap();

        assert_matches!(
            args.command,
            SubCommand::Sign(cmd) if cmd.message == "hello" && cmd.timestamp == Some(1000)
        );
    }

    #[test]
    fn test_parse_send_without_timestamp() {
        let args = Args::try_parse_from([
            "sigverify",
            "send",
            "--url",
            "http://127.0.0.1:3000/",
            "--message",
            "hello",
        ])
        .unwrap();

        assert_matches!(
            args.command,
            SubCommand::Send(cmd) if cmd.url == "http://127.0.0.1:3000/" && cmd.timestamp.is_none()
        );
    }

    #[test]
    fn test_parse_rejects_non_integer_timestamp() {
        assert!(
            Args::try_parse_from(["sigverify", "sign", "--message", "m", "--timestamp", "soon"])
                .is_err()
        );
    }
}
