//! Built-in knowledge base and the generic fallback record.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use princex_protocols::types::{normalize, ExplanationRecord, Subject};

static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(KnowledgeBase::from_builtin_entries);

/// Immutable map from normalized term to its explanation.
pub struct KnowledgeBase {
    entries: HashMap<&'static str, ExplanationRecord>,
}

impl KnowledgeBase {
    /// The knowledge base shipped with PrinceX.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Look up a term; case and surrounding whitespace are ignored.
    pub fn lookup(&self, term: &str) -> Option<&ExplanationRecord> {
        self.entries.get(normalize(term).as_str())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.lookup(term).is_some()
    }

    /// Known terms, sorted.
    pub fn terms(&self) -> Vec<&'static str> {
        let mut terms: Vec<&'static str> = self.entries.keys().copied().collect();
        terms.sort_unstable();
        terms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_builtin_entries() -> Self {
        let entries = HashMap::from([
            ("binary search", binary_search()),
            ("stack", stack()),
            ("deadlock", deadlock()),
        ]);
        Self { entries }
    }
}

/// Generic explanation used whenever neither the knowledge base nor a
/// provider can answer. Mentions `term` exactly as given.
pub fn fallback_record(term: &str) -> ExplanationRecord {
    ExplanationRecord {
        subject: None,
        definition: format!(
            "{} refers to a concept or term that may be related to computer science, programming, or technology.",
            term
        ),
        analogy: "Without specific context, this term could have multiple meanings across different domains."
            .to_string(),
        technical: format!(
            "The term \"{}\" should be analyzed in its specific context. It may relate to algorithms, data structures, system design, or other technical areas.",
            term
        ),
        diagram: Some(
            "Context-specific diagram would depend on the exact meaning and application of this term."
                .to_string(),
        ),
        code: Some(format!(
            "// Example context needed\n// \"{}\" - please provide more context for a specific code example",
            term
        )),
        mistakes: vec![
            "Using terms without understanding their specific context".to_string(),
            "Confusing similar-sounding concepts".to_string(),
            "Not verifying definitions from reliable sources".to_string(),
        ],
        tip: format!(
            "When encountering \"{}\", always check the context and domain to understand its specific meaning in that area.",
            term
        ),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn binary_search() -> ExplanationRecord {
    ExplanationRecord {
        subject: Some(Subject::Dsa),
        definition: "Binary Search is a searching algorithm that finds the position of a target value within a sorted array. It compares the target value to the middle element and eliminates half of the search space in each step.".to_string(),
        analogy: "Think of finding a word in a dictionary. You open it in the middle, check if your word comes before or after, then repeat with the relevant half. You never read every page.".to_string(),
        technical: "Binary Search works only on sorted arrays. It starts at the middle index, compares the target with the middle element. If target is smaller, search the left half. If larger, search the right half. Repeat until found or search space is empty. Time complexity: O(log n).".to_string(),
        diagram: Some("Array: [2, 5, 8, 12, 16, 23, 38, 45, 56, 67, 78]\nTarget: 23\nStep 1: Check middle (16) → go right\nStep 2: Check middle of right half (56) → go left\nStep 3: Check middle (23) → Found!".to_string()),
        code: Some(r#"# Python - Binary Search
def binary_search(arr, target):
    left, right = 0, len(arr) - 1

    while left <= right:
        mid = (left + right) // 2

        if arr[mid] == target:
            return mid  # Found
        elif arr[mid] < target:
            left = mid + 1  # Search right
        else:
            right = mid - 1  # Search left

    return -1  # Not found

# Example
arr = [2, 5, 8, 12, 16, 23, 38, 45]
result = binary_search(arr, 23)
print(f"Found at index: {result}")  # Output: 5"#.to_string()),
        mistakes: strings(&[
            "Forgetting to sort the array first",
            "Using wrong mid calculation (can cause overflow in some languages)",
            "Not handling the case when element is not found",
            "Confusing left/right pointer updates (off-by-one errors)",
        ]),
        tip: "Remember: Binary Search only works on SORTED data. In interviews, always verify the array is sorted first. Time complexity O(log n) is the key advantage over linear search O(n).".to_string(),
    }
}

fn stack() -> ExplanationRecord {
    ExplanationRecord {
        subject: Some(Subject::Dsa),
        definition: "A Stack is a linear data structure that follows the Last-In-First-Out (LIFO) principle. The element added most recently is the first one to be removed.".to_string(),
        analogy: "Think of a stack of plates in a cafeteria. You can only add a plate on top (push) and remove the top plate (pop). You cannot take a plate from the middle or bottom without removing the ones above it.".to_string(),
        technical: "Stack supports two main operations: Push (add element to top) and Pop (remove element from top). Additional operations include Peek/Top (view top element without removing) and isEmpty (check if stack is empty). Implemented using arrays or linked lists. Time complexity: O(1) for all operations.".to_string(),
        diagram: Some("Initial Stack: [10, 20, 30] (30 is top)\n\nPush(40):\n[10, 20, 30, 40] ← 40 is now top\n\nPop():\n[10, 20, 30] ← removed 40\n\nPeek():\n30 ← just view, don't remove".to_string()),
        code: Some(r#"# Python - Stack Implementation
class Stack:
    def __init__(self):
        self.items = []

    def push(self, item):
        self.items.append(item)

    def pop(self):
        if not self.is_empty():
            return self.items.pop()
        return None

    def peek(self):
        if not self.is_empty():
            return self.items[-1]
        return None

    def is_empty(self):
        return len(self.items) == 0

# Example usage
stack = Stack()
stack.push(10)
stack.push(20)
stack.push(30)
print(stack.pop())   # Output: 30
print(stack.peek())  # Output: 20"#.to_string()),
        mistakes: strings(&[
            "Trying to pop from an empty stack (causes underflow)",
            "Not checking isEmpty() before pop/peek operations",
            "Confusing Stack (LIFO) with Queue (FIFO)",
            "Forgetting that arrays have a maximum size in some languages",
        ]),
        tip: "Key interview uses: Function call stack, undo operations, expression evaluation, backtracking algorithms. Remember LIFO - Last In, First Out!".to_string(),
    }
}

fn deadlock() -> ExplanationRecord {
    ExplanationRecord {
        subject: Some(Subject::Os),
        definition: "Deadlock is a situation where two or more processes are unable to proceed because each is waiting for the other to release a resource. All processes remain blocked indefinitely.".to_string(),
        analogy: "Imagine two people facing each other in a narrow hallway. Person A waits for Person B to move, while Person B waits for Person A to move. Neither can proceed, and they are stuck forever unless someone gives way.".to_string(),
        technical: "Deadlock occurs when four conditions hold simultaneously: Mutual Exclusion (resources cannot be shared), Hold and Wait (process holding resources can request more), No Preemption (resources cannot be forcibly taken), and Circular Wait (circular chain of processes waiting for resources). Prevention involves breaking at least one condition.".to_string(),
        diagram: Some("Process P1 holds Resource R1, needs Resource R2\n       ↓ holds        ↓ needs\n      R1 ←----------→ R2\n       ↑ needs        ↑ holds\nProcess P2 holds Resource R2, needs Resource R1\n\nCircular Wait: P1 → R2 → P2 → R1 → P1".to_string()),
        code: Some(r#"# Python - Deadlock Example (DON'T DO THIS!)
import threading

lock1 = threading.Lock()
lock2 = threading.Lock()

def thread1_work():
    lock1.acquire()
    print("Thread 1: acquired lock1")
    # Simulating some work
    import time; time.sleep(0.1)

    lock2.acquire()  # Waiting for lock2
    print("Thread 1: acquired lock2")
    lock2.release()
    lock1.release()

def thread2_work():
    lock2.acquire()
    print("Thread 2: acquired lock2")
    import time; time.sleep(0.1)

    lock1.acquire()  # Waiting for lock1 (DEADLOCK!)
    print("Thread 2: acquired lock1")
    lock1.release()
    lock2.release()

# This will cause deadlock
t1 = threading.Thread(target=thread1_work)
t2 = threading.Thread(target=thread2_work)
t1.start()
t2.start()"#.to_string()),
        mistakes: strings(&[
            "Not acquiring locks in a consistent order across threads",
            "Holding locks while waiting for other resources",
            "Not using timeout mechanisms for lock acquisition",
            "Ignoring deadlock prevention strategies in design",
        ]),
        tip: "In exams, identify all 4 Coffman conditions. In interviews, mention prevention strategies: Lock ordering, timeouts, deadlock detection algorithms, or avoiding hold-and-wait by requesting all resources at once.".to_string(),
    }
}
