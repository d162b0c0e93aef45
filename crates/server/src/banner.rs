pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ███████╗██████╗ ██╗███████╗ ██████╗ ██████╗ ███████╗
 ██╔════╝██╔══██╗██║██╔════╝██╔═══██╗██╔══██╗██╔════╝
 █████╗  ██████╔╝██║███████╗██║   ██║██║  ██║█████╗      episode-server
 ██╔══╝  ██╔═══╝ ██║╚════██║██║   ██║██║  ██║██╔══╝      v{}
 ███████╗██║     ██║███████║╚██████╔╝██████╔╝███████╗
 ╚══════╝╚═╝     ╚═╝╚══════╝ ╚═════╝ ╚═════╝ ╚══════╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
