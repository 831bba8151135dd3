use gather_shim::config::Layout;
use gather_shim::launch;

fn main() {
    launch::run_main("gather-shim", Layout::packaged())
}
