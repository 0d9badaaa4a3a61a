pub const INFO_TEXT: &str = "\
When deciding between the three options for clearing RAM cache in Linux, it’s essential to understand what each option does, the implications of using it, and the contexts in which it might be appropriate. Below are the reasons and differences for using each option:

### 1. Clear PageCache Only (sync; echo 1 > /proc/sys/vm/drop_caches)

#### What It Does:
- PageCache holds the contents of files that are read from or written to disk. This speeds up file access by avoiding disk reads for frequently accessed files.
- This command clears the PageCache without affecting directory entries (dentries) or inode caches.

#### Reasons to Use:
- Safe for Production: It is the least disruptive option and is generally safe to use in production environments. Clearing just the PageCache typically has minimal impact on the system's performance.
- When Memory is Limited: If your system is running low on memory and you need to free up some space without affecting the filesystem metadata, this is the best choice.
- Avoids Performance Drops: Since only the file data is cleared, applications relying on the filesystem metadata (dentries and inodes) will not experience significant performance drops.

### 2. Clear Dentries and Inodes (sync; echo 2 > /proc/sys/vm/drop_caches)

#### What It Does:
- Dentries cache directory entries, which are used to resolve file paths to their corresponding inodes.
- Inodes store metadata about files, such as file ownership, permissions, and timestamps.
- This command clears the dentries and inodes, but not the PageCache.

#### Reasons to Use:
- When Filesystem Metadata Changes: If the filesystem structure has undergone significant changes (like after heavy file operations or creating/deleting many files), clearing dentries and inodes can help reclaim memory.
- When Path Resolution is Slowed: Sometimes, the system can become sluggish due to a large amount of cached metadata, especially in environments with lots of small files. Clearing dentries and inodes can improve performance in such cases.

### 3. Clear PageCache, Dentries, and Inodes (sync; echo 3 > /proc/sys/vm/drop_caches)

#### What It Does:
- This command clears everything: PageCache, dentries, and inodes.

#### Reasons to Use:
- Complete Cache Clear: Use this when you need to completely clear all caches to free up as much memory as possible.
- After Intensive Disk Operations: If the system has just completed very intensive disk operations, clearing all caches might help reset the memory usage and improve performance.
- Development/Testing Environments: It might be useful in non-production environments where you need to simulate a 'cold' system state or test performance under different caching scenarios.

#### Caution:
- Potential Performance Impact: Since this command clears both data and metadata caches, applications might experience a significant slowdown as the system has to reload everything from disk. This is why it’s generally not recommended for production use unless you are certain of the need and impact.
- Repopulating Caches: After running this command, the system will need to repopulate all caches from scratch, which can lead to slower performance initially.

### Summary of Differences and Best Use Cases:
- echo 1 > /proc/sys/vm/drop_caches: Safest and most focused on freeing file data cache. Best for typical use cases where memory needs to be reclaimed without impacting filesystem performance.
- echo 2 > /proc/sys/vm/drop_caches: Targets filesystem metadata, useful in scenarios where directory or file access becomes a bottleneck due to excessive cached metadata.
- echo 3 > /proc/sys/vm/drop_caches: Most aggressive option, clearing all caches. Suitable for non-production environments or specific situations where a complete cache reset is necessary, but can severely impact performance until caches are rebuilt.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_text_covers_every_level() {
        for level in 1..=3 {
            let command = format!("echo {} > /proc/sys/vm/drop_caches", level);
            assert!(INFO_TEXT.contains(&command), "missing {}", command);
        }
        assert!(INFO_TEXT.contains("### 1. Clear PageCache Only"));
        assert!(INFO_TEXT.contains("### 2. Clear Dentries and Inodes"));
        assert!(INFO_TEXT.contains("### 3. Clear PageCache, Dentries, and Inodes"));
    }

    #[test]
    fn test_info_text_keeps_typographic_apostrophes() {
        assert_eq!(INFO_TEXT.matches('\u{2019}').count(), 2);
        assert!(INFO_TEXT.starts_with("When deciding between the three options for clearing RAM cache in Linux, it\u{2019}s essential"));
    }
}
