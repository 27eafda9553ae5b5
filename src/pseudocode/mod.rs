//! Static pseudocode listings
//!
//! Every algorithm has one listing. Steps refer to its lines by
//! 1-based number, so the code panel can emphasize them in sync with
//! the structure highlight.

use std::collections::BTreeSet;

use crate::trace::LineNumber;

/// Title plus ordered lines of pseudocode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Panel title
    pub title: &'static str,

    /// Lines, numbered from 1
    pub lines: &'static [&'static str],
}

impl Listing {
    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the listing has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line text by 1-based number
    pub fn line(&self, number: LineNumber) -> Option<&'static str> {
        self.lines.get(usize::from(number.get()) - 1).copied()
    }

    /// Render as a numbered panel, marking highlighted lines with `>`
    pub fn render(&self, highlighted: &BTreeSet<LineNumber>) -> String {
        let mut out = String::new();
        out.push_str(self.title);
        out.push('\n');
        for (i, text) in self.lines.iter().enumerate() {
            let number = i + 1;
            let marker = if highlighted.iter().any(|l| usize::from(l.get()) == number) {
                '>'
            } else {
                ' '
            };
            out.push_str(&format!("{} {:>2}. {}\n", marker, number, text));
        }
        out
    }
}

/// Algorithm selector shared by traces and the code panel
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Algorithm {
    // 1-D array
    ArrayGet,
    ArraySet,
    ArrayFill,
    ArrayRandomize,
    ArrayTraverse,
    ArrayLinearSearch,
    ArrayBinarySearch,
    ArrayMin,
    ArrayMax,
    ArrayReverse,
    ArrayBubbleSort,

    // Matrix
    MatrixGet,
    MatrixSet,
    MatrixFill,
    MatrixRandomize,
    MatrixRowMajor,
    MatrixColumnMajor,
    MatrixSpiral,
    MatrixSearch,
    MatrixTranspose,
    MatrixRotate90,

    // Linked lists
    ListInsertHead,
    ListInsertTail,
    ListInsertAfter,
    ListInsertBefore,
    ListDeleteHead,
    ListDeleteTail,
    ListDeleteAt,
    ListDeleteValue,
    ListSearch,
    ListTraverseForward,
    ListTraverseBackward,

    // Binary search tree
    TreeInsert,
    TreeSearch,
    TreeDelete,
    TreeInOrder,
    TreePreOrder,
    TreePostOrder,
    TreeLevelOrder,
    TreeMin,
    TreeMax,

    // Stack
    StackPush,
    StackPop,
    StackPeek,
    StackIsEmpty,
    StackIsFull,

    // Queue
    QueueEnqueue,
    QueueDequeue,
    QueueFront,
    QueueIsEmpty,
    QueueIsFull,
}

impl Algorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [Algorithm; 51] = [
        Algorithm::ArrayGet,
        Algorithm::ArraySet,
        Algorithm::ArrayFill,
        Algorithm::ArrayRandomize,
        Algorithm::ArrayTraverse,
        Algorithm::ArrayLinearSearch,
        Algorithm::ArrayBinarySearch,
        Algorithm::ArrayMin,
        Algorithm::ArrayMax,
        Algorithm::ArrayReverse,
        Algorithm::ArrayBubbleSort,
        Algorithm::MatrixGet,
        Algorithm::MatrixSet,
        Algorithm::MatrixFill,
        Algorithm::MatrixRandomize,
        Algorithm::MatrixRowMajor,
        Algorithm::MatrixColumnMajor,
        Algorithm::MatrixSpiral,
        Algorithm::MatrixSearch,
        Algorithm::MatrixTranspose,
        Algorithm::MatrixRotate90,
        Algorithm::ListInsertHead,
        Algorithm::ListInsertTail,
        Algorithm::ListInsertAfter,
        Algorithm::ListInsertBefore,
        Algorithm::ListDeleteHead,
        Algorithm::ListDeleteTail,
        Algorithm::ListDeleteAt,
        Algorithm::ListDeleteValue,
        Algorithm::ListSearch,
        Algorithm::ListTraverseForward,
        Algorithm::ListTraverseBackward,
        Algorithm::TreeInsert,
        Algorithm::TreeSearch,
        Algorithm::TreeDelete,
        Algorithm::TreeInOrder,
        Algorithm::TreePreOrder,
        Algorithm::TreePostOrder,
        Algorithm::TreeLevelOrder,
        Algorithm::TreeMin,
        Algorithm::TreeMax,
        Algorithm::StackPush,
        Algorithm::StackPop,
        Algorithm::StackPeek,
        Algorithm::StackIsEmpty,
        Algorithm::StackIsFull,
        Algorithm::QueueEnqueue,
        Algorithm::QueueDequeue,
        Algorithm::QueueFront,
        Algorithm::QueueIsEmpty,
        Algorithm::QueueIsFull,
    ];

    /// Pseudocode listing for this algorithm
    pub fn listing(self) -> &'static Listing {
        use Algorithm::*;
        match self {
            ArrayGet => &ARRAY_GET,
            ArraySet => &ARRAY_SET,
            ArrayFill => &ARRAY_FILL,
            ArrayRandomize => &ARRAY_RANDOMIZE,
            ArrayTraverse => &ARRAY_TRAVERSE,
            ArrayLinearSearch => &ARRAY_LINEAR_SEARCH,
            ArrayBinarySearch => &ARRAY_BINARY_SEARCH,
            ArrayMin => &ARRAY_MIN,
            ArrayMax => &ARRAY_MAX,
            ArrayReverse => &ARRAY_REVERSE,
            ArrayBubbleSort => &ARRAY_BUBBLE_SORT,
            MatrixGet => &MATRIX_GET,
            MatrixSet => &MATRIX_SET,
            MatrixFill => &MATRIX_FILL,
            MatrixRandomize => &MATRIX_RANDOMIZE,
            MatrixRowMajor => &MATRIX_ROW_MAJOR,
            MatrixColumnMajor => &MATRIX_COLUMN_MAJOR,
            MatrixSpiral => &MATRIX_SPIRAL,
            MatrixSearch => &MATRIX_SEARCH,
            MatrixTranspose => &MATRIX_TRANSPOSE,
            MatrixRotate90 => &MATRIX_ROTATE90,
            ListInsertHead => &LIST_INSERT_HEAD,
            ListInsertTail => &LIST_INSERT_TAIL,
            ListInsertAfter => &LIST_INSERT_AFTER,
            ListInsertBefore => &LIST_INSERT_BEFORE,
            ListDeleteHead => &LIST_DELETE_HEAD,
            ListDeleteTail => &LIST_DELETE_TAIL,
            ListDeleteAt => &LIST_DELETE_AT,
            ListDeleteValue => &LIST_DELETE_VALUE,
            ListSearch => &LIST_SEARCH,
            ListTraverseForward => &LIST_TRAVERSE_FORWARD,
            ListTraverseBackward => &LIST_TRAVERSE_BACKWARD,
            TreeInsert => &TREE_INSERT,
            TreeSearch => &TREE_SEARCH,
            TreeDelete => &TREE_DELETE,
            TreeInOrder => &TREE_IN_ORDER,
            TreePreOrder => &TREE_PRE_ORDER,
            TreePostOrder => &TREE_POST_ORDER,
            TreeLevelOrder => &TREE_LEVEL_ORDER,
            TreeMin => &TREE_MIN,
            TreeMax => &TREE_MAX,
            StackPush => &STACK_PUSH,
            StackPop => &STACK_POP,
            StackPeek => &STACK_PEEK,
            StackIsEmpty => &STACK_IS_EMPTY,
            StackIsFull => &STACK_IS_FULL,
            QueueEnqueue => &QUEUE_ENQUEUE,
            QueueDequeue => &QUEUE_DEQUEUE,
            QueueFront => &QUEUE_FRONT,
            QueueIsEmpty => &QUEUE_IS_EMPTY,
            QueueIsFull => &QUEUE_IS_FULL,
        }
    }
}

const ARRAY_GET: Listing = Listing {
    title: "Array Access",
    lines: &["Validate array bounds for index i", "Return element at A[i]"],
};

const ARRAY_SET: Listing = Listing {
    title: "Array Assignment",
    lines: &["Validate array bounds for index i", "Assign value to A[i]"],
};

const ARRAY_FILL: Listing = Listing {
    title: "Fill Operation",
    lines: &["For each index i from 0 to n-1:", "  Set A[i] = specified value"],
};

const ARRAY_RANDOMIZE: Listing = Listing {
    title: "Randomize",
    lines: &["For each index i from 0 to n-1:", "  Set A[i] = random value in [10, 100)"],
};

const ARRAY_TRAVERSE: Listing = Listing {
    title: "Traversal",
    lines: &["For each index i from 0 to n-1:", "  Process element A[i]"],
};

const ARRAY_LINEAR_SEARCH: Listing = Listing {
    title: "Linear Search",
    lines: &[
        "For each index i from 0 to n-1:",
        "  Compare A[i] with target value",
        "  If match found, return index i",
        "Return -1 (not found)",
    ],
};

const ARRAY_BINARY_SEARCH: Listing = Listing {
    title: "Binary Search",
    lines: &[
        "Initialize left = 0, right = n-1",
        "Calculate middle = (left + right) / 2",
        "If A[middle] equals target: return middle",
        "If target < A[middle]: search left half",
        "If target > A[middle]: search right half",
        "Return -1 if not found",
    ],
};

const ARRAY_MIN: Listing = Listing {
    title: "Find Minimum",
    lines: &[
        "Initialize minIndex = 0",
        "For each index i from 1 to n-1:",
        "  If A[i] < A[minIndex]: minIndex = i",
        "Return minIndex",
    ],
};

const ARRAY_MAX: Listing = Listing {
    title: "Find Maximum",
    lines: &[
        "Initialize maxIndex = 0",
        "For each index i from 1 to n-1:",
        "  If A[i] > A[maxIndex]: maxIndex = i",
        "Return maxIndex",
    ],
};

const ARRAY_REVERSE: Listing = Listing {
    title: "Reverse Array",
    lines: &[
        "Set l = 0, r = n - 1",
        "While l < r:",
        "  swap A[l] and A[r]",
        "  l = l + 1, r = r - 1",
        "End",
    ],
};

const ARRAY_BUBBLE_SORT: Listing = Listing {
    title: "Bubble Sort",
    lines: &[
        "For i = 0 … n-2:",
        "  (new pass) set swapped = false",
        "  For j = 0 … n-2-i: compare A[j], A[j+1]",
        "    If A[j] > A[j+1]: swap, set swapped = true",
        "  End pass (last index fixed)",
        "  If swapped == false: early exit",
    ],
};

const MATRIX_GET: Listing = Listing {
    title: "Matrix Access",
    lines: &["access A[r][c] in O(1)", "return A[r][c]"],
};

const MATRIX_SET: Listing = Listing {
    title: "Matrix Assignment",
    lines: &["index (r,c) in bounds", "A[r][c] ← x", "return"],
};

const MATRIX_FILL: Listing = Listing {
    title: "Matrix Fill",
    lines: &["for each cell A[i][j]:", "  A[i][j] ← x", "return"],
};

const MATRIX_RANDOMIZE: Listing = Listing {
    title: "Matrix Randomize",
    lines: &["for each cell A[i][j]:", "  A[i][j] ← random in [10, 100)", "return"],
};

const MATRIX_ROW_MAJOR: Listing = Listing {
    title: "Row-Major Traversal",
    lines: &["for i in 0..rows-1:", "  for j in 0..cols-1: visit(A[i][j])"],
};

const MATRIX_COLUMN_MAJOR: Listing = Listing {
    title: "Column-Major Traversal",
    lines: &["for j in 0..cols-1:", "  for i in 0..rows-1: visit(A[i][j])"],
};

const MATRIX_SPIRAL: Listing = Listing {
    title: "Spiral Traversal",
    lines: &[
        "Maintain top, bottom, left, right bounds",
        "Traverse top row left→right",
        "Traverse right col top→bottom",
        "Traverse bottom row right→left",
        "Traverse left col bottom→top; shrink bounds; repeat",
    ],
};

const MATRIX_SEARCH: Listing = Listing {
    title: "Matrix Search",
    lines: &[
        "for each cell A[i][j]:",
        "  if A[i][j] == target: return (i,j)",
        "  continue",
        "return not found",
    ],
};

const MATRIX_TRANSPOSE: Listing = Listing {
    title: "Transpose",
    lines: &["B[j][i] ← A[i][j] for all i,j", "return B (size cols×rows)"],
};

const MATRIX_ROTATE90: Listing = Listing {
    title: "Rotate 90° Clockwise",
    lines: &["Create B of size (cols × rows)", "For all i,j: B[j][rows-1-i] ← A[i][j]"],
};

const LIST_INSERT_HEAD: Listing = Listing {
    title: "Insert at Head",
    lines: &[
        "Create new node with value",
        "Point new node.next to current head",
        "Update head to new node",
    ],
};

const LIST_INSERT_TAIL: Listing = Listing {
    title: "Insert at Tail",
    lines: &[
        "Create new node with value",
        "If list empty, set as head",
        "Traverse to last node",
        "Link last.next to new node",
    ],
};

const LIST_INSERT_AFTER: Listing = Listing {
    title: "Insert After Index",
    lines: &[
        "Find node at target index",
        "Create new node with value",
        "Update new node pointers (prev/next)",
        "Update adjacent node pointers",
    ],
};

const LIST_INSERT_BEFORE: Listing = Listing {
    title: "Insert Before Index",
    lines: &[
        "Find node at target index",
        "Create new node with value",
        "Update new node pointers (prev/next)",
        "Update adjacent node pointers",
    ],
};

const LIST_DELETE_HEAD: Listing = Listing {
    title: "Delete Head",
    lines: &["Check if list is empty", "Save head node value", "Move head to next node"],
};

const LIST_DELETE_TAIL: Listing = Listing {
    title: "Delete Tail",
    lines: &[
        "Check if list is empty",
        "Traverse to second-last node",
        "Remove link to last node",
    ],
};

const LIST_DELETE_AT: Listing = Listing {
    title: "Delete at Index",
    lines: &[
        "Find node at target index",
        "Update previous node's next pointer",
        "Update next node's prev pointer",
        "Remove target node",
    ],
};

const LIST_DELETE_VALUE: Listing = Listing {
    title: "Delete by Value",
    lines: &[
        "Search for node with value",
        "Update previous node's next pointer",
        "Update next node's prev pointer",
        "Remove target node",
    ],
};

const LIST_SEARCH: Listing = Listing {
    title: "Search (Linked List)",
    lines: &[
        "Start at head node",
        "Compare current value with target",
        "If equal, return node",
        "Return null if not found",
    ],
};

const LIST_TRAVERSE_FORWARD: Listing = Listing {
    title: "Traverse List",
    lines: &["Start at head", "Visit each node via next until null"],
};

const LIST_TRAVERSE_BACKWARD: Listing = Listing {
    title: "Traverse List Backward",
    lines: &["Start at tail", "Visit each node via prev until null"],
};

const TREE_INSERT: Listing = Listing {
    title: "BST Insert",
    lines: &[
        "cur ← root",
        "while cur ≠ null:",
        "  if x == cur.val: return (duplicate)",
        "  cur ← (x < cur.val) ? cur.left : cur.right",
        "attach new node x at null position",
    ],
};

const TREE_SEARCH: Listing = Listing {
    title: "BST Search",
    lines: &[
        "cur ← root",
        "while cur ≠ null:",
        "  if x == cur.val: return cur (found)",
        "  if x < cur.val: cur ← cur.left",
        "  else: cur ← cur.right",
        "return not found",
    ],
};

const TREE_DELETE: Listing = Listing {
    title: "BST Delete",
    lines: &[
        "cur ← root",
        "while cur and cur.val ≠ x:",
        "  if x < cur.val: cur ← cur.left",
        "  else: cur ← cur.right",
        "if cur is null: return (not found)",
        "// found node cur",
        "if leaf: remove cur",
        "else if single child: promote child",
        "else: // two children",
        "  s ← leftmost(cur.right)",
        "  cur.val ← s.val",
        "  delete s from cur.right",
    ],
};

const TREE_IN_ORDER: Listing = Listing {
    title: "Inorder Traversal",
    lines: &[
        "function inorder(node):",
        "  if node == null: return",
        "  inorder(node.left)",
        "  visit(node)",
        "  inorder(node.right)",
    ],
};

const TREE_PRE_ORDER: Listing = Listing {
    title: "Preorder Traversal",
    lines: &[
        "function preorder(node):",
        "  if node == null: return",
        "  visit(node)",
        "  preorder(node.left)",
        "  preorder(node.right)",
    ],
};

const TREE_POST_ORDER: Listing = Listing {
    title: "Postorder Traversal",
    lines: &[
        "function postorder(node):",
        "  if node == null: return",
        "  postorder(node.left)",
        "  postorder(node.right)",
        "  visit(node)",
    ],
};

const TREE_LEVEL_ORDER: Listing = Listing {
    title: "Level-Order Traversal",
    lines: &[
        "q ← [root]",
        "while q not empty:",
        "  node ← dequeue(q)",
        "  visit(node)",
        "  if node.left: enqueue(node.left)",
        "  if node.right: enqueue(node.right)",
    ],
};

const TREE_MIN: Listing = Listing {
    title: "BST Minimum",
    lines: &["cur ← root", "while cur.left ≠ null:", "  cur ← cur.left", "return cur.val"],
};

const TREE_MAX: Listing = Listing {
    title: "BST Maximum",
    lines: &["cur ← root", "while cur.right ≠ null:", "  cur ← cur.right", "return cur.val"],
};

const STACK_PUSH: Listing = Listing {
    title: "Push Operation",
    lines: &[
        "if size == capacity: return overflow",
        "else: top ← top + 1",
        "stack[top] ← value",
        "size ← size + 1",
        "return success",
    ],
};

const STACK_POP: Listing = Listing {
    title: "Pop Operation",
    lines: &[
        "if size == 0: return underflow",
        "value ← stack[top]",
        "top ← top - 1, size ← size - 1",
        "return value",
    ],
};

const STACK_PEEK: Listing = Listing {
    title: "Peek / Top",
    lines: &["if size == 0: return null", "return stack[top]", "end"],
};

const STACK_IS_EMPTY: Listing = Listing {
    title: "Is Empty Check",
    lines: &["return (size == 0)", "end"],
};

const STACK_IS_FULL: Listing = Listing {
    title: "Is Full Check",
    lines: &["return (size == capacity)", "end"],
};

const QUEUE_ENQUEUE: Listing = Listing {
    title: "Enqueue Operation",
    lines: &[
        "if size == capacity: return overflow",
        "rear ← (front + size) % capacity",
        "queue[rear] ← value",
        "size ← size + 1",
        "return success",
    ],
};

const QUEUE_DEQUEUE: Listing = Listing {
    title: "Dequeue Operation",
    lines: &[
        "if size == 0: return underflow",
        "value ← queue[front]",
        "front ← (front + 1) % capacity",
        "size ← size - 1",
        "return value",
    ],
};

const QUEUE_FRONT: Listing = Listing {
    title: "Front / Peek",
    lines: &["if size == 0: return null", "return queue[front]", "end"],
};

const QUEUE_IS_EMPTY: Listing = Listing {
    title: "Is Empty Check",
    lines: &["return (size == 0)", "end"],
};

const QUEUE_IS_FULL: Listing = Listing {
    title: "Is Full Check",
    lines: &["return (size == capacity)", "end"],
};
