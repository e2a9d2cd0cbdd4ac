//! No Space Left On Device.
//!
//! The terminal transcript is replayed into a directory tree. Directories live
//! in an arena and refer to each other by index; a child is always pushed after
//! its parent, so walking the arena backwards visits every subtree before the
//! directory that contains it.

use std::fmt;

use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

const SMALL_DIR_LIMIT: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const SPACE_REQUIRED: u64 = 30_000_000;

const ROOT: DirId = 0;

type DirId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Cd(&'a str),
    Ls,
    Dir(&'a str),
    File(&'a str, u64),
}

#[derive(Debug)]
struct Directory {
    name: String,
    parent: Option<DirId>,
    dirs: FxHashMap<String, DirId>,
    files: FxHashMap<String, u64>,
}

#[derive(Debug, Default)]
struct Filesystem {
    dirs: Vec<Directory>,
    cwd: Option<DirId>,
}

fn parse_line<'a>(pattern: &Regex, ix: usize, line: &'a str) -> Result<Line<'a>, PuzzleError> {
    let bad = || PuzzleError::parse(ix, line, "a cd/ls command or an ls entry");
    let caps = pattern.captures(line).ok_or_else(bad)?;
    if let Some(name) = caps.name("cd") {
        Ok(Line::Cd(name.as_str()))
    } else if caps.name("ls").is_some() {
        Ok(Line::Ls)
    } else if let Some(name) = caps.name("dir") {
        Ok(Line::Dir(name.as_str()))
    } else {
        match (caps.name("size"), caps.name("file")) {
            (Some(size), Some(name)) => Ok(Line::File(name.as_str(), size.as_str().parse().map_err(|_| bad())?)),
            _ => Err(bad())
        }
    }
}

impl Filesystem {
    fn new_dir(&mut self, name: &str, parent: Option<DirId>) -> DirId {
        self.dirs.push(Directory {
            name: name.to_owned(),
            parent,
            dirs: FxHashMap::default(),
            files: FxHashMap::default(),
        });
        self.dirs.len() - 1
    }

    fn cwd(&self, line: usize) -> Result<DirId, PuzzleError> {
        self.cwd.ok_or(PuzzleError::NoWorkingDirectory {line})
    }

    /// Returns the child directory, creating it if it has not been seen yet.
    fn child(&mut self, parent: DirId, name: &str) -> DirId {
        if let Some(&id) = self.dirs[parent].dirs.get(name) {return id}
        let id = self.new_dir(name, Some(parent));
        self.dirs[parent].dirs.insert(name.to_owned(), id);
        id
    }

    fn change_directory(&mut self, name: &str, line: usize) -> Result<(), PuzzleError> {
        let target = match (self.cwd, name) {
            (None, "..") => return Err(PuzzleError::NoWorkingDirectory {line}),
            (None, _) => self.new_dir(name, None),
            (Some(_), "/") => ROOT,
            (Some(cwd), ".") => cwd,
            (Some(cwd), "..") => self.dirs[cwd].parent.ok_or(PuzzleError::AboveRoot {line})?,
            (Some(cwd), _) => self.child(cwd, name),
        };
        trace!(path = %self.path(target), "cd");
        self.cwd = Some(target);
        Ok(())
    }

    fn replay(&mut self, transcript: &str) -> Result<(), PuzzleError> {
        let pattern = Regex::new(
            r"^(?:\$ cd (?P<cd>\S+)|\$ (?P<ls>ls)|dir (?P<dir>\S+)|(?P<size>\d+) (?P<file>\S+))$"
        ).unwrap();
        for (ix, line) in transcript.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {continue}
            match parse_line(&pattern, ix, line)? {
                Line::Cd(name) => self.change_directory(name, ix + 1)?,
                Line::Ls => (),
                Line::Dir(name) => {
                    let cwd = self.cwd(ix + 1)?;
                    self.child(cwd, name);
                },
                Line::File(name, size) => {
                    let cwd = self.cwd(ix + 1)?;
                    self.dirs[cwd].files.insert(name.to_owned(), size);
                },
            }
        }
        if self.dirs.is_empty() {return Err(PuzzleError::EmptyInput)}
        Ok(())
    }

    /// Total size of every directory, indexed by id.
    fn sizes(&self) -> Vec<u64> {
        let mut sizes = self.dirs.iter().map(|dir| dir.files.values().sum::<u64>()).collect::<Vec<_>>();
        for id in (1 .. self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[id].parent {sizes[parent] += sizes[id]}
        }
        sizes
    }

    fn path(&self, id: DirId) -> String {
        let mut names = vec![];
        let mut at = Some(id);
        while let Some(id) = at {
            let dir = &self.dirs[id];
            if dir.parent.is_some() {names.push(dir.name.as_str())}
            at = dir.parent;
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, id: DirId, depth: usize) -> fmt::Result {
        let dir = &self.dirs[id];
        writeln!(f, "{:indent$}- {} (dir)", "", dir.name, indent = 2 * depth)?;
        let entries = dir.dirs.iter().map(|(name, &child)| (name, Some(child), 0))
            .chain(dir.files.iter().map(|(name, &size)| (name, None, size)))
            .sorted_by(|a, b| a.0.cmp(b.0));
        for (name, child, size) in entries {
            match child {
                Some(child) => self.render(f, child, depth + 1)?,
                None => writeln!(f, "{:indent$}- {} (file, size={})", "", name, size, indent = 2 * depth + 2)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Filesystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dirs.is_empty() {Ok(())} else {self.render(f, ROOT, 0)}
    }
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let mut fs = Filesystem::default();
    fs.replay(input)?;
    debug!("filesystem:\n{}", fs);
    let sizes = fs.sizes();

    if part == 1 {
        Ok(sizes.iter().filter(|&&size| size <= SMALL_DIR_LIMIT).sum::<u64>().to_string())
    } else {
        let free = DISK_SIZE.saturating_sub(sizes[ROOT]);
        let needed = SPACE_REQUIRED.saturating_sub(free);
        let (id, size) = sizes.iter().copied().enumerate()
            .filter(|&(_, size)| size >= needed)
            .min_by_key(|&(_, size)| size)
            .ok_or(PuzzleError::NothingToDelete {needed})?;
        info!(path = %fs.path(id), size, needed, "directory to delete");
        Ok(size.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn example() -> Filesystem {
        let mut fs = Filesystem::default();
        fs.replay(EXAMPLE).unwrap();
        fs
    }

    fn size_of(fs: &Filesystem, path: &str) -> u64 {
        let sizes = fs.sizes();
        let id = (0 .. fs.dirs.len()).find(|&id| fs.path(id) == path).unwrap();
        sizes[id]
    }

    #[test]
    fn example_part_one() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "95437");
    }

    #[test]
    fn example_part_two() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "24933642");
    }

    #[test]
    fn subtree_sizes() {
        let fs = example();
        assert_eq!(size_of(&fs, "/a/e"), 584);
        assert_eq!(size_of(&fs, "/a"), 94853);
        assert_eq!(size_of(&fs, "/d"), 24933642);
        assert_eq!(size_of(&fs, "/"), 48381165);
    }

    #[test]
    fn renders_tree() {
        let expected = "\
- / (dir)
  - a (dir)
    - e (dir)
      - i (file, size=584)
    - f (file, size=29116)
    - g (file, size=2557)
    - h.lst (file, size=62596)
  - b.txt (file, size=14848514)
  - c.dat (file, size=8504156)
  - d (dir)
    - d.ext (file, size=5626152)
    - d.log (file, size=8033020)
    - j (file, size=4060174)
    - k (file, size=7214296)
";
        assert_eq!(example().to_string(), expected);
    }

    #[test]
    fn relisting_keeps_contents() {
        let input = format!("{}$ cd /\n$ ls\ndir a\n14848514 b.txt\n", EXAMPLE);
        assert_eq!(solve(1, &input).unwrap(), "95437");
    }

    #[test]
    fn cd_above_root() {
        assert_eq!(solve(1, "$ cd /\n$ cd ..\n"), Err(PuzzleError::AboveRoot { line: 2 }));
    }

    #[test]
    fn listing_before_cd() {
        assert_eq!(solve(1, "$ ls\n12 a\n"), Err(PuzzleError::NoWorkingDirectory { line: 2 }));
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(solve(1, "$ cd /\n$ rm -rf a\n"), Err(PuzzleError::Parse { line: 2, .. })));
    }

    #[test]
    fn disk_too_full() {
        let input = "$ cd /\n$ ls\n99999999 huge\n";
        assert_eq!(solve(2, input).unwrap(), "99999999");
    }
}
