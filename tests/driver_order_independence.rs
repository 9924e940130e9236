//! Exercises the parallel file driver's order-independence guarantee:
//! running with different worker counts must produce the same set of
//! output files with byte-identical contents.

use std::fs;
use std::path::PathBuf;

use corpus_cleanup::config::PipelineConfig;
use corpus_cleanup::driver::ParallelFileDriver;
use tempfile::tempdir;

fn make_corpus(src: &std::path::Path, count: usize) {
    fs::create_dir_all(src).unwrap();
    for i in 0..count {
        let body = format!(
            "Document number {i}. The fir\u{017f}t hou\u{017f}e on tliis street was old. "
        )
        .repeat(20);
        fs::write(src.join(format!("doc_{i}.txt")), body).unwrap();
    }
}

fn run_with_workers(workers: usize) -> (std::path::PathBuf, tempfile::TempDir) {
    let root = tempdir().unwrap();
    let src = root.path().join("src");
    let dst = root.path().join(format!("dst_{workers}"));
    make_corpus(&src, 12);

    let mut config = PipelineConfig::default();
    config.workers = workers;
    let driver = ParallelFileDriver::new(config);

    let jobs: Vec<(PathBuf, PathBuf)> = fs::read_dir(&src)
        .unwrap()
        .map(|e| e.unwrap().path())
        .map(|p| {
            let name = p.file_name().unwrap().to_owned();
            (p, dst.join(name))
        })
        .collect();

    driver.run(&jobs, &dst, None, None).unwrap();
    (dst, root)
}

#[test]
fn single_worker_and_many_workers_produce_identical_output() {
    let (dst_one, _root_one) = run_with_workers(1);
    let (dst_many, _root_many) = run_with_workers(8);

    let mut names_one: Vec<_> = fs::read_dir(&dst_one)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".txt"))
        .collect();
    let mut names_many: Vec<_> = fs::read_dir(&dst_many)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with(".txt"))
        .collect();
    names_one.sort();
    names_many.sort();
    assert_eq!(names_one, names_many);

    for name in names_one {
        let a = fs::read(dst_one.join(&name)).unwrap();
        let b = fs::read(dst_many.join(&name)).unwrap();
        assert_eq!(a, b, "contents differ for {name:?}");
    }
}
