//! Performance benchmarks for project-explorer

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use project_explorer::test_utils::TestTree;
use project_explorer::tools::{dir_tree, python_outline};
use project_explorer::{TreeFormat, TreeWalker, WalkerConfig, extract_headings, outline_source};

const PYTHON_SOURCE: &str = r#"#!/usr/bin/env python3
"""
Module docstring explaining the purpose of this module.

This is a longer description with more details.
"""

import os
import sys
from collections import OrderedDict, defaultdict
from typing import Any


class Repository:
    """Stores things."""

    def __init__(self, root):
        """Create a repository at root."""
        self.root = root

    @property
    def name(self):
        return os.path.basename(self.root)

    async def sync(self):
        """Synchronize with the remote."""
        pass


def main():
    """Entry point."""
    print("Hello, world!")
"#;

const MARKDOWN_SOURCE: &str = "# Project

Some introduction text.

## Installation

Run the installer.

### From source

```sh
make install
```

## Usage

#### Options

Details.
";

fn create_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("pkg_{d}/sub/module_{f}.py"), PYTHON_SOURCE);
        }
    }
    tree
}

fn bench_outline_source(c: &mut Criterion) {
    let large = PYTHON_SOURCE.repeat(50);

    let mut group = c.benchmark_group("python_outline_source");

    group.bench_function("small_module", |b| {
        b.iter(|| outline_source(black_box(PYTHON_SOURCE)))
    });

    group.bench_function("large_module", |b| {
        b.iter(|| outline_source(black_box(&large)))
    });

    group.finish();
}

fn bench_extract_headings(c: &mut Criterion) {
    let large = MARKDOWN_SOURCE.repeat(200);

    let mut group = c.benchmark_group("markdown_headings");

    group.bench_function("small_document", |b| {
        b.iter(|| extract_headings(black_box(MARKDOWN_SOURCE)))
    });

    group.bench_function("large_document", |b| {
        b.iter(|| extract_headings(black_box(&large)))
    });

    group.finish();
}

fn bench_tree_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_walk");

    let small = create_tree(5, 10);
    let medium = create_tree(20, 25);

    for (label, tree) in [("small_50_files", &small), ("medium_500_files", &medium)] {
        let walker = TreeWalker::new(WalkerConfig::with_max_depth(3));
        group.bench_function(format!("text_{label}"), |b| {
            b.iter(|| walker.walk_text(black_box(tree.path())))
        });
        group.bench_function(format!("nodes_{label}"), |b| {
            b.iter(|| walker.walk_nodes(black_box(tree.path())))
        });
    }

    group.finish();
}

fn bench_tools(c: &mut Criterion) {
    let tree = create_tree(4, 25);
    let root = tree.root_str();
    let paths: Vec<String> = (0..25)
        .map(|f| tree.path_str(&format!("pkg_0/sub/module_{f}.py")))
        .collect();

    let mut group = c.benchmark_group("tools");

    group.bench_function("dir_tree_json_depth_2", |b| {
        b.iter(|| dir_tree(black_box(&root), 2, TreeFormat::Json))
    });

    group.bench_function("python_outline_25_files", |b| {
        b.iter(|| python_outline(black_box(&paths)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_outline_source,
    bench_extract_headings,
    bench_tree_walk,
    bench_tools,
);
criterion_main!(benches);
