// PATH-only entry point, for installs that put `gather` in a shared bin directory.
use gather_shim::config::Layout;
use gather_shim::launch;

fn main() {
    launch::run_main("gather-shim-path", Layout::search_path_only())
}
