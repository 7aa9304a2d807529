//! Reference information shown next to the visualization.

use serde::Serialize;

use crate::algorithms::{Algorithm, Implementation, SortKind};

/// Static description of one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    /// Display name.
    pub name: &'static str,
    /// Time complexity summary.
    pub time_complexity: &'static str,
    /// Auxiliary space.
    pub space_complexity: &'static str,
    /// `"Yes"`, `"No"` or `"Unknown"`.
    pub stable: &'static str,
    /// `"Yes"`, `"No"` or `"Unknown"`.
    pub in_place: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Multi-line pseudocode listing.
    pub pseudocode: &'static str,
}

/// Entry for algorithms without a real implementation.
pub const UNKNOWN: AlgorithmInfo = AlgorithmInfo {
    name: "Unknown Algorithm",
    time_complexity: "Unknown",
    space_complexity: "Unknown",
    stable: "Unknown",
    in_place: "Unknown",
    description: "No information available.",
    pseudocode: "// Implementation coming soon...",
};

const BUBBLE: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time_complexity: "O(n²) avg/worst, O(n) best",
    space_complexity: "O(1)",
    stable: "Yes",
    in_place: "Yes",
    description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
    pseudocode: "procedure bubbleSort(A : list of sortable items)
    n := length(A)
    repeat
        swapped := false
        for i := 1 to n - 1 inclusive do
            if A[i-1] > A[i] then
                swap(A[i-1], A[i])
                swapped = true
            end if
        end for
        n := n - 1
    until not swapped
end procedure",
};

const SELECTION: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time_complexity: "O(n²) all cases",
    space_complexity: "O(1)",
    stable: "No",
    in_place: "Yes",
    description: "Finds the minimum element and places it at the beginning, then repeats for the remaining elements.",
    pseudocode: "procedure selectionSort(A : array of sortable items)
    n := length(A)
    for i := 0 to n-2 do
        min := i
        for j := i+1 to n-1 do
            if A[j] < A[min] then
                min := j
            end if
        end for
        if min ≠ i then
            swap(A[i], A[min])
        end if
    end for
end procedure",
};

const INSERTION: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time_complexity: "O(n²) avg/worst, O(n) best",
    space_complexity: "O(1)",
    stable: "Yes",
    in_place: "Yes",
    description: "Builds the sorted array one element at a time by inserting each element into its correct position.",
    pseudocode: "procedure insertionSort(A : array of sortable items)
    for i := 1 to length(A)-1 do
        key := A[i]
        j := i - 1
        while j >= 0 and A[j] > key do
            A[j+1] := A[j]
            j := j - 1
        end while
        A[j+1] := key
    end for
end procedure",
};

const MERGE: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time_complexity: "O(n log n) all cases",
    space_complexity: "O(n)",
    stable: "Yes",
    in_place: "No",
    description: "Divide-and-conquer algorithm that divides the array into halves, sorts them recursively, then merges the results.",
    pseudocode: "procedure mergeSort(A : array of sortable items)
    if length(A) <= 1 then
        return A
    end if

    mid := length(A) / 2
    left := mergeSort(A[0..mid-1])
    right := mergeSort(A[mid..length(A)-1])

    return merge(left, right)
end procedure

procedure merge(left, right)
    result := empty array
    while left is not empty and right is not empty do
        if left[0] <= right[0] then
            append left[0] to result
            remove left[0] from left
        else
            append right[0] to result
            remove right[0] from right
        end if
    end while
    append remaining elements of left to result
    append remaining elements of right to result
    return result
end procedure",
};

const QUICK: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time_complexity: "O(n log n) avg, O(n²) worst",
    space_complexity: "O(log n) avg, O(n) worst",
    stable: "No",
    in_place: "Yes",
    description: "Selects a pivot element and partitions the array around it, then recursively sorts the partitions.",
    pseudocode: "procedure quickSort(A : array of sortable items, low, high)
    if low < high then
        pi := partition(A, low, high)
        quickSort(A, low, pi - 1)
        quickSort(A, pi + 1, high)
    end if
end procedure

procedure partition(A, low, high)
    pivot := A[high]
    i := low - 1
    for j := low to high - 1 do
        if A[j] <= pivot then
            i := i + 1
            swap(A[i], A[j])
        end if
    end for
    swap(A[i + 1], A[high])
    return i + 1
end procedure",
};

const HEAP: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    time_complexity: "O(n log n) all cases",
    space_complexity: "O(1)",
    stable: "No",
    in_place: "Yes",
    description: "Uses a binary heap data structure to sort elements by repeatedly extracting the maximum.",
    pseudocode: "procedure heapSort(A : array of sortable items)
    buildMaxHeap(A)
    for i := length(A) - 1 downto 1 do
        swap(A[0], A[i])
        heapify(A, 0, i)
    end for
end procedure

procedure buildMaxHeap(A)
    for i := floor(length(A)/2) - 1 downto 0 do
        heapify(A, i, length(A))
    end for
end procedure

procedure heapify(A, i, heapSize)
    left := 2 * i + 1
    right := 2 * i + 2
    largest := i

    if left < heapSize and A[left] > A[largest] then
        largest := left
    end if
    if right < heapSize and A[right] > A[largest] then
        largest := right
    end if

    if largest ≠ i then
        swap(A[i], A[largest])
        heapify(A, largest, heapSize)
    end if
end procedure",
};

/// Information for an implemented algorithm.
#[must_use]
pub const fn for_kind(kind: SortKind) -> &'static AlgorithmInfo {
    match kind {
        SortKind::Bubble => &BUBBLE,
        SortKind::Selection => &SELECTION,
        SortKind::Insertion => &INSERTION,
        SortKind::Merge => &MERGE,
        SortKind::Quick => &QUICK,
        SortKind::Heap => &HEAP,
    }
}

/// Information for a menu entry. Placeholders get [`UNKNOWN`].
#[must_use]
pub fn info(algorithm: Algorithm) -> &'static AlgorithmInfo {
    match algorithm.implementation() {
        Implementation::Native(kind) => for_kind(kind),
        Implementation::Fallback { .. } => &UNKNOWN,
    }
}
